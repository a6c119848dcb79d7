use crate::obj::{ObjBuilder, ObjParsingErrorDetail};

use super::to_zero_based;

/// Decides the normal index of a face from its first component.
///
/// Without any normal in the scene the face gets no normal. A `v/vt/vn`
/// component references a normal; the upper bound accepts the normal count
/// itself, such a reference has to be made valid by a later normal record.
/// Any other shape drops the normals of the whole scene.
pub fn resolve_normal_index(
    first_component: &str,
    obj_builder: &mut ObjBuilder,
) -> Result<Option<usize>, ObjParsingErrorDetail> {
    let normal_count = obj_builder.normal_count();
    if normal_count == 0 {
        return Ok(None);
    }

    let mut sub_components = first_component.split('/');
    let (Some(_), Some(_), Some(normal), None) = (
        sub_components.next(),
        sub_components.next(),
        sub_components.next(),
        sub_components.next(),
    ) else {
        obj_builder.drop_normals();
        return Ok(None);
    };

    let one_based = normal
        .parse::<i64>()
        .map_err(|source| ObjParsingErrorDetail::InvalidNormalIndex {
            token: normal.to_owned(),
            source,
        })?;

    to_zero_based(one_based)
        .filter(|&index| index <= normal_count)
        .map(Some)
        .ok_or(ObjParsingErrorDetail::NormalIndexOutOfRange {
            index: one_based,
            count: normal_count,
        })
}
