mod parse_face_components;
mod resolve_normal_index;

use crate::scene::FaceDescriptor;

use super::{ObjBuilder, ObjParsingErrorDetail};
use parse_face_components::parse_face_components;
use resolve_normal_index::resolve_normal_index;

/// Parses the `v[/vt[/vn]]` tokens of a face record into a [`FaceDescriptor`]
/// and stores it.
///
/// Normals are associated with faces scene-wide or not at all: the normal
/// reference of the first token is used for the whole face, and a face whose
/// first token has no normal reference drops every normal of the scene (see
/// [`ObjBuilder::drop_normals`]).
pub fn parse_face_line<'a>(
    components: impl Iterator<Item = &'a str>,
    line_count: usize,
    line: &str,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let components: Vec<&str> = components.collect();
    if components.len() < 3 {
        return Err(ObjParsingErrorDetail::FaceTooSmall {
            count: components.len(),
        });
    }

    let vertex_indices = parse_face_components(&components, obj_builder.vertex_count())?;
    let normal_index = resolve_normal_index(components[0], obj_builder)?;

    obj_builder.push_face(
        FaceDescriptor {
            vertex_indices,
            normal_index,
        },
        line_count,
        line,
    )
}

/// Converts a 1-based reference of the file into a 0-based index, `None` when
/// it can not be one.
fn to_zero_based(one_based: i64) -> Option<usize> {
    one_based
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
}
