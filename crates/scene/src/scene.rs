mod face_view;
mod validate_normals;

pub use face_view::FaceView;
pub(crate) use validate_normals::validate_normals;

use std::sync::OnceLock;

use linear_algebra::Vec3;

use crate::obj::ObjParsingErrorDetail;

pub type Point3 = Vec3<f64>;
pub type Vector3 = Vec3<f64>;

/// A polygon as stored in the file: 0-based vertex indices and, when the scene
/// associates normals with faces, the 0-based index of its normal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceDescriptor {
    pub vertex_indices: Vec<usize>,
    pub normal_index: Option<usize>,
}

/// A stored face and its lazily computed geometry.
#[derive(Debug)]
pub(crate) struct Face {
    vertex_indices: Box<[usize]>,
    normal_index: Option<usize>,

    vertices: OnceLock<Box<[Point3]>>,
    derived_normal: OnceLock<Vector3>,
}

/// Immutable result of a parse. Every index held by its faces is in range of
/// its own vertex and normal tables.
#[derive(Debug)]
pub struct Scene {
    vertices: Box<[Point3]>,
    normals: Box<[Vector3]>,
    faces: Box<[Face]>,
}

impl From<FaceDescriptor> for Face {
    fn from(descriptor: FaceDescriptor) -> Self {
        Self {
            vertex_indices: descriptor.vertex_indices.into_boxed_slice(),
            normal_index: descriptor.normal_index,
            vertices: OnceLock::new(),
            derived_normal: OnceLock::new(),
        }
    }
}


// Constructors:

impl Scene {
    /// Builds a scene out of already resolved tables, checking every index the
    /// faces hold.
    pub fn try_new(
        vertices: Vec<Point3>,
        normals: Vec<Vector3>,
        faces: Vec<FaceDescriptor>,
    ) -> Result<Self, ObjParsingErrorDetail> {
        for face in &faces {
            check_face(face, vertices.len(), normals.len())?;
        }
        Ok(Self::from_validated_parts(
            vertices.into_boxed_slice(),
            normals.into_boxed_slice(),
            faces,
        ))
    }

    pub(crate) fn from_validated_parts(
        vertices: Box<[Point3]>,
        normals: Box<[Vector3]>,
        faces: Vec<FaceDescriptor>,
    ) -> Self {
        Self {
            vertices,
            normals,
            faces: faces.into_iter().map(Face::from).collect(),
        }
    }
}

fn check_face(
    face: &FaceDescriptor,
    vertex_count: usize,
    normal_count: usize,
) -> Result<(), ObjParsingErrorDetail> {
    if face.vertex_indices.len() < 3 {
        return Err(ObjParsingErrorDetail::FaceTooSmall {
            count: face.vertex_indices.len(),
        });
    }
    if let Some(&index) = face.vertex_indices.iter().find(|&&index| index >= vertex_count) {
        return Err(ObjParsingErrorDetail::VertexIndexOutOfRange {
            index: index as i64 + 1,
            count: vertex_count,
        });
    }
    match face.normal_index {
        Some(index) if index >= normal_count => Err(ObjParsingErrorDetail::NormalIndexOutOfRange {
            index: index as i64 + 1,
            count: normal_count,
        }),
        _ => Ok(()),
    }
}


// Getters:

impl Scene {
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face(&self, index: usize) -> Option<FaceView<'_>> {
        self.faces
            .get(index)
            .map(|face| FaceView::new(self, face))
    }

    /// Faces in file order.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = FaceView<'_>> + '_ {
        self.faces.iter().map(|face| FaceView::new(self, face))
    }
}
