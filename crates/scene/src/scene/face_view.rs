use super::{Face, Point3, Scene, Vector3};

/// Read-only view of one face of a [`Scene`].
///
/// The resolved vertices and the normal derived from them are computed on
/// first use and cached in the scene, so every view of the same face returns
/// the same slices and references.
#[derive(Clone, Copy)]
pub struct FaceView<'a> {
    scene: &'a Scene,
    face: &'a Face,
}

impl<'a> FaceView<'a> {
    pub(crate) fn new(scene: &'a Scene, face: &'a Face) -> Self {
        Self { scene, face }
    }

    pub fn vertex_indices(&self) -> &'a [usize] {
        &self.face.vertex_indices
    }

    /// `None` when the normal is derived from the vertices.
    pub fn normal_index(&self) -> Option<usize> {
        self.face.normal_index
    }

    /// The points of the face, in file order.
    pub fn vertices(&self) -> &'a [Point3] {
        self.face.vertices.get_or_init(|| {
            self.face
                .vertex_indices
                .iter()
                .map(|&index| self.scene.vertices[index])
                .collect()
        })
    }

    /// The normal table entry of the face, or the normal derived from its
    /// first three vertices.
    pub fn normal(&self) -> &'a Vector3 {
        match self.face.normal_index {
            Some(index) => &self.scene.normals[index],
            None => self.derived_normal(),
        }
    }

    /// `normalize((v1 - v0) ^ (v2 - v1))`, the zero vector for degenerate faces.
    pub fn derived_normal(&self) -> &'a Vector3 {
        self.face.derived_normal.get_or_init(|| {
            let vertices = self.vertices();
            let first_edge = vertices[1] - &vertices[0];
            let second_edge = vertices[2] - &vertices[1];
            (first_edge ^ second_edge).normalize()
        })
    }

    /// Whether the normal of the table points the same way as the derived one.
    /// Always true when the face has no normal index.
    pub fn is_normal_consistent(&self) -> bool {
        match self.face.normal_index {
            Some(index) => self.derived_normal().is_same_direction(&self.scene.normals[index]),
            None => true,
        }
    }
}

impl std::fmt::Debug for FaceView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceView")
            .field("vertex_indices", &self.vertex_indices())
            .field("normal_index", &self.normal_index())
            .finish()
    }
}
