use crate::obj::ObjParsingErrorDetail;

use super::Scene;

/// Fails on the first face, in file order, whose normal disagrees with the
/// normal derived from its vertices.
pub(crate) fn validate_normals(scene: &Scene) -> Result<(), ObjParsingErrorDetail> {
    match scene.faces().position(|face| !face.is_normal_consistent()) {
        Some(face_index) => Err(ObjParsingErrorDetail::InvalidNormals { face_index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use crate::scene::{FaceDescriptor, Point3, Vector3};

    use super::*;

    fn square_fan(normals: Vec<Vector3>) -> Scene {
        let vertices: Vec<Point3> = vec![
            [0., 0., 0.].into(),
            [1., 0., 0.].into(),
            [1., 1., 0.].into(),
            [0., 1., 0.].into(),
        ];
        let faces = [[0, 1, 2], [0, 2, 3], [2, 3, 0]]
            .into_iter()
            .enumerate()
            .map(|(i, vertex_indices)| FaceDescriptor {
                vertex_indices: vertex_indices.to_vec(),
                normal_index: Some(i),
            })
            .collect();
        Scene::try_new(vertices, normals, faces).unwrap()
    }

    #[test]
    fn accepts_consistent_normals() {
        let scene = square_fan(vec![[0., 0., 1.].into(); 3]);
        assert!(validate_normals(&scene).is_ok());
    }

    #[test]
    fn reports_first_inconsistent_face() {
        let scene = square_fan(vec![
            [0., 0., 1.].into(),
            [0., 0., 2.].into(),
            [0., 0., -1.].into(),
        ]);
        assert!(matches!(
            validate_normals(&scene),
            Err(ObjParsingErrorDetail::InvalidNormals { face_index: 2 })
        ));
    }

    #[test]
    fn faces_without_normal_index_always_pass() {
        let scene = Scene::try_new(
            vec![[0., 0., 0.].into(), [0., 1., 0.].into(), [1., 0., 0.].into()],
            vec![],
            vec![FaceDescriptor {
                vertex_indices: vec![0, 1, 2],
                normal_index: None,
            }],
        )
        .unwrap();
        assert!(validate_normals(&scene).is_ok());
    }
}
