pub mod obj;
pub mod scene;

pub use obj::{ObjFile, ObjParsingError, ObjParsingErrorDetail, ParseOptions, WavefrontParser};
pub use scene::{FaceDescriptor, FaceView, Point3, Scene, Vector3};
