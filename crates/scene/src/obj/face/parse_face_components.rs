use rs42::extensions::vec::TryPush;

use crate::obj::ObjParsingErrorDetail;

use super::to_zero_based;

pub fn parse_face_components(
    components: &[&str],
    vertex_count: usize,
) -> Result<Vec<usize>, ObjParsingErrorDetail> {
    components
        .iter()
        .try_fold(Vec::new(), |mut vertex_indices, component| {
            let index = parse_vertex_sub_component(component, vertex_count)?;
            vertex_indices
                .try_push(index)
                .map_err(ObjParsingErrorDetail::AllocationFailure)?;
            Ok(vertex_indices)
        })
}

/// The vertex reference is the first `/`-separated sub component, texture and
/// normal references are not looked at here.
fn parse_vertex_sub_component(
    component: &str,
    vertex_count: usize,
) -> Result<usize, ObjParsingErrorDetail> {
    let (vertex, _) = component.split_once('/').unwrap_or((component, ""));

    let one_based = vertex
        .parse::<i64>()
        .map_err(|source| ObjParsingErrorDetail::InvalidVertexIndex {
            token: vertex.to_owned(),
            source,
        })?;

    to_zero_based(one_based)
        .filter(|&index| index < vertex_count)
        .ok_or(ObjParsingErrorDetail::VertexIndexOutOfRange {
            index: one_based,
            count: vertex_count,
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_every_token_shape() {
        assert_eq!(parse_face_components(&["1", "2", "3"], 3).unwrap(), [0, 1, 2]);
        assert_eq!(parse_face_components(&["3/1", "2/2", "1/3"], 3).unwrap(), [2, 1, 0]);
        assert_eq!(parse_face_components(&["1//1", "2//1", "3//1"], 3).unwrap(), [0, 1, 2]);
        assert_eq!(parse_face_components(&["1/1/1", "2/2/1", "3/3/1"], 3).unwrap(), [0, 1, 2]);
    }

    #[test]
    fn malformed_vertex_reference() {
        match parse_face_components(&["1.4343//1", "5//1", "7//1"], 8) {
            Err(ObjParsingErrorDetail::InvalidVertexIndex { token, .. }) => {
                assert_eq!(token, "1.4343")
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_face_components(&["/1/1", "2", "3"], 3),
            Err(ObjParsingErrorDetail::InvalidVertexIndex { .. })
        ));
    }

    #[test]
    fn vertex_reference_out_of_range() {
        assert!(matches!(
            parse_face_components(&["1", "2", "4"], 3),
            Err(ObjParsingErrorDetail::VertexIndexOutOfRange { index: 4, count: 3 })
        ));
        assert!(matches!(
            parse_face_components(&["0", "1", "2"], 3),
            Err(ObjParsingErrorDetail::VertexIndexOutOfRange { index: 0, count: 3 })
        ));
        assert!(matches!(
            parse_face_components(&["-1", "1", "2"], 3),
            Err(ObjParsingErrorDetail::VertexIndexOutOfRange { index: -1, count: 3 })
        ));
    }
}
