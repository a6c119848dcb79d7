use rs42::extensions::vec::TryPush;

use crate::scene::{FaceDescriptor, Point3, Scene, Vector3};

use super::{ObjParsingError, ObjParsingErrorDetail};

/// Tables accumulated while streaming. Owned by a single parse and turned into
/// an immutable [`Scene`] by [`ObjBuilder::build`].
#[derive(Default, Debug)]
pub struct ObjBuilder {
    vertices: Vec<Point3>,
    normals: Vec<Vector3>,
    faces: Vec<FaceDescriptor>,

    // Set once a face came without a normal reference while normals existed.
    normals_dropped: bool,
    // Faces whose normal index equals the normal count at the time they were
    // parsed, with the line that introduced them.
    pending_normal_references: Vec<PendingNormalReference>,
}

#[derive(Debug)]
struct PendingNormalReference {
    face_index: usize,
    line_count: usize,
    line: String,
}

impl ObjBuilder {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn push_vertex(&mut self, vertex: Point3) -> Result<(), ObjParsingErrorDetail> {
        self.vertices
            .try_push(vertex)
            .map_err(ObjParsingErrorDetail::AllocationFailure)
    }

    pub fn push_normal(&mut self, normal: Vector3) -> Result<(), ObjParsingErrorDetail> {
        if self.normals_dropped {
            return Ok(());
        }
        self.normals
            .try_push(normal)
            .map_err(ObjParsingErrorDetail::AllocationFailure)
    }

    pub fn push_face(
        &mut self,
        face: FaceDescriptor,
        line_count: usize,
        line: &str,
    ) -> Result<(), ObjParsingErrorDetail> {
        if face.normal_index == Some(self.normals.len()) {
            self.pending_normal_references
                .try_push(PendingNormalReference {
                    face_index: self.faces.len(),
                    line_count,
                    line: line.to_owned(),
                })
                .map_err(ObjParsingErrorDetail::AllocationFailure)?;
        }
        self.faces
            .try_push(face)
            .map_err(ObjParsingErrorDetail::AllocationFailure)
    }

    /// Forgets every normal of the scene, for the faces already parsed and for
    /// the rest of the input.
    pub fn drop_normals(&mut self) {
        tracing::debug!(
            dropped_normals = self.normals.len(),
            faces = self.faces.len(),
            "face without normal reference, dropping normals of the whole scene"
        );
        self.normals = Vec::new();
        self.faces
            .iter_mut()
            .for_each(|face| face.normal_index = None);
        self.pending_normal_references.clear();
        self.normals_dropped = true;
    }

    pub(crate) fn build(self) -> Result<Scene, ObjParsingError> {
        let normal_count = self.normals.len();
        if let Some(pending) = self
            .pending_normal_references
            .into_iter()
            .find(|pending| self.faces[pending.face_index].normal_index >= Some(normal_count))
        {
            return Err(ObjParsingError::at_line(
                pending.line_count,
                pending.line,
                ObjParsingErrorDetail::NormalIndexOutOfRange {
                    index: normal_count as i64 + 1,
                    count: normal_count,
                },
            ));
        }

        Ok(Scene::from_validated_parts(
            self.vertices.into_boxed_slice(),
            self.normals.into_boxed_slice(),
            self.faces,
        ))
    }
}
