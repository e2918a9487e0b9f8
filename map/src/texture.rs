//! Interpretation of the raw texture fields of a face.
//!
//! The document only keeps the tokens. Standard (Quake) and Valve 220 layouts are
//! understood here, numbers past the scale (Quake 2 surface flags and the like) end
//! up in [`TextureInfo::extra`].
use glam::{DVec2, DVec4};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::space0,
    combinator::{all_consuming, map},
    multi::many0,
    number::complete::double as _double,
    sequence::{preceded, terminated, tuple},
    IResult as _IResult,
};

use crate::{error::TextureError, types::Face};

type IResult<'a, T> = _IResult<&'a str, T>;

#[derive(Debug, Clone, PartialEq)]
pub enum TextureAlignment {
    /// `xoff yoff rotation xscale yscale`
    Standard {
        offset: DVec2,
        rotation: f64,
        scale: DVec2,
    },
    /// `[ Ux Uy Uz Uoffset ] [ Vx Vy Vz Voffset ] rotation xscale yscale`
    Valve220 {
        u: DVec4,
        v: DVec4,
        rotation: f64,
        scale: DVec2,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureInfo {
    pub name: String,
    pub alignment: TextureAlignment,
    pub extra: Vec<f64>,
}

fn double(i: &str) -> IResult<f64> {
    preceded(space0, _double)(i)
}

fn texture_name(i: &str) -> IResult<&str> {
    preceded(space0, take_till1(|c: char| c.is_whitespace()))(i)
}

fn parse_plane_uv(i: &str) -> IResult<DVec4> {
    terminated(
        preceded(
            tuple((space0, tag("["), space0)),
            map(
                tuple((double, double, double, double)),
                |(x, y, z, offset)| DVec4::new(x, y, z, offset),
            ),
        ),
        tuple((space0, tag("]"))),
    )(i)
}

fn valve220(i: &str) -> IResult<TextureAlignment> {
    map(
        tuple((parse_plane_uv, parse_plane_uv, double, double, double)),
        |(u, v, rotation, u_scale, v_scale)| TextureAlignment::Valve220 {
            u,
            v,
            rotation,
            scale: DVec2::new(u_scale, v_scale),
        },
    )(i)
}

fn standard(i: &str) -> IResult<TextureAlignment> {
    map(
        tuple((double, double, double, double, double)),
        |(x_offset, y_offset, rotation, x_scale, y_scale)| TextureAlignment::Standard {
            offset: DVec2::new(x_offset, y_offset),
            rotation,
            scale: DVec2::new(x_scale, y_scale),
        },
    )(i)
}

fn parse_texture_info(i: &str) -> IResult<TextureInfo> {
    all_consuming(terminated(
        map(
            tuple((texture_name, alt((valve220, standard)), many0(double))),
            |(name, alignment, extra)| TextureInfo {
                name: name.to_string(),
                alignment,
                extra,
            },
        ),
        space0,
    ))(i)
}

impl Face {
    pub fn texture_info(&self) -> Result<TextureInfo, TextureError> {
        if self.texture.is_empty() {
            return Err(TextureError::Empty);
        }

        let text = self.texture.join(" ");

        match parse_texture_info(&text) {
            Ok((_, info)) => Ok(info),
            Err(_) => Err(TextureError::Malformed { text: text.clone() }),
        }
    }
}

#[cfg(test)]
mod test {
    use glam::DVec3;

    use super::*;

    fn face(texture: &str) -> Face {
        Face {
            p1: DVec3::ZERO,
            p2: DVec3::Z,
            p3: DVec3::Y,
            texture: texture.split_whitespace().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn standard_format() {
        let info = face("sky4 16 -8 90 0.5 2").texture_info().unwrap();

        assert_eq!(info.name, "sky4");
        assert_eq!(
            info.alignment,
            TextureAlignment::Standard {
                offset: DVec2::new(16., -8.),
                rotation: 90.,
                scale: DVec2::new(0.5, 2.),
            }
        );
        assert!(info.extra.is_empty());
    }

    #[test]
    fn valve_format() {
        let info = face("NULL [ 2.220446049250313e-16 0 -1 24 ] [ 0 -1 0 0 ] 0 1 1")
            .texture_info()
            .unwrap();

        assert_eq!(info.name, "NULL");

        let TextureAlignment::Valve220 { u, v, rotation, scale } = info.alignment else {
            panic!("expected valve 220 alignment");
        };

        assert_eq!(u, DVec4::new(2.220446049250313e-16, 0., -1., 24.));
        assert_eq!(v, DVec4::new(0., -1., 0., 0.));
        assert_eq!(rotation, 0.);
        assert_eq!(scale, DVec2::ONE);
    }

    #[test]
    fn tight_brackets() {
        let info = face("NULL [1 0 0 0] [0 -1 0 0] 0 1 1").texture_info().unwrap();

        assert!(matches!(info.alignment, TextureAlignment::Valve220 { .. }));
    }

    #[test]
    fn surface_flags() {
        let info = face("e1u1/floor1_3 0 0 0 1 1 0 1 0").texture_info().unwrap();

        assert_eq!(info.name, "e1u1/floor1_3");
        assert_eq!(info.extra, vec![0., 1., 0.]);
    }

    #[test]
    fn empty_fields() {
        assert_eq!(face("").texture_info(), Err(TextureError::Empty));
    }

    #[test]
    fn too_few_numbers() {
        assert!(matches!(
            face("NULL 0 0 0").texture_info(),
            Err(TextureError::Malformed { .. })
        ));
    }

    #[test]
    fn trailing_word() {
        assert!(matches!(
            face("NULL 0 0 0 1 1 detail").texture_info(),
            Err(TextureError::Malformed { .. })
        ));
    }
}
