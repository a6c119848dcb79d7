use rs42::extensions::PipeLine;

use crate::scene::Vector3;

use super::{ObjBuilder, ObjParsingErrorDetail};

pub fn parse_vertex_line<'a>(
    components: impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    parse_coordinates(components)?.pipe(|vertex| obj_builder.push_vertex(vertex))
}

pub fn parse_normal_line<'a>(
    components: impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    parse_coordinates(components)?.pipe(|normal| obj_builder.push_normal(normal))
}

/// Parses exactly three coordinates and maps them from the file's Y-up frame:
/// `x y z` becomes `(x, -z, y)`.
pub fn parse_coordinates<'a>(
    components: impl Iterator<Item = &'a str>,
) -> Result<Vector3, ObjParsingErrorDetail> {
    let components: Vec<&str> = components.collect();
    let &[x, y, z] = components.as_slice() else {
        return Err(ObjParsingErrorDetail::MalformedCoordinate {
            count: components.len(),
        });
    };

    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;
    let z = parse_coordinate(z)?;
    Ok([x, -z, y].into())
}

fn parse_coordinate(str: &str) -> Result<f64, ObjParsingErrorDetail> {
    str.parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
        .ok_or_else(|| ObjParsingErrorDetail::InvalidNumber {
            token: str.to_owned(),
        })
}

#[cfg(test)]
mod test {
    use linear_algebra::assert_approximately_equal;

    use super::*;

    fn parse(line: &str) -> Result<Vector3, ObjParsingErrorDetail> {
        parse_coordinates(line.split_whitespace())
    }

    #[test]
    fn remaps_axes() {
        assert_approximately_equal(parse("1.0 2.0 3.0").unwrap(), [1., -3., 2.].into());
        assert_approximately_equal(
            parse("1.232927 2.117226 -1.361101").unwrap(),
            [1.232927, 1.361101, 2.117226].into(),
        );
    }

    #[test]
    fn accepts_integers_and_exponents() {
        assert_approximately_equal(parse("1 -2e1 0.5").unwrap(), [1., -0.5, -20.].into());
    }

    #[test]
    fn wrong_arity_is_malformed() {
        assert!(matches!(
            parse("2.117226 -1.361101"),
            Err(ObjParsingErrorDetail::MalformedCoordinate { count: 2 })
        ));
        assert!(matches!(
            parse("1.0 1.0 2.0 -1.0"),
            Err(ObjParsingErrorDetail::MalformedCoordinate { count: 4 })
        ));
        assert!(matches!(
            parse(""),
            Err(ObjParsingErrorDetail::MalformedCoordinate { count: 0 })
        ));
    }

    #[test]
    fn arity_is_checked_before_numbers() {
        assert!(matches!(
            parse("foo 1.0"),
            Err(ObjParsingErrorDetail::MalformedCoordinate { count: 2 })
        ));
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_tokens() {
        match parse("-0.0871 foo 0.2372") {
            Err(ObjParsingErrorDetail::InvalidNumber { token }) => assert_eq!(token, "foo"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse("1.0 inf 0.0"),
            Err(ObjParsingErrorDetail::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse("NaN 0.0 0.0"),
            Err(ObjParsingErrorDetail::InvalidNumber { .. })
        ));
    }
}
