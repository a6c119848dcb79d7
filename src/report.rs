use std::fmt::Write;

use scene::{FaceView, Scene};

pub fn summary(scene: &Scene) -> String {
    let derived = scene
        .faces()
        .filter(|face| face.normal_index().is_none())
        .count();
    let inconsistent = scene
        .faces()
        .filter(|face| !face.is_normal_consistent())
        .count();

    format!(
        "vertices: {}\nnormals: {}\nfaces: {} ({derived} with derived normal, {inconsistent} inconsistent)\n",
        scene.vertices().len(),
        scene.normals().len(),
        scene.face_count(),
    )
}

pub fn faces(scene: &Scene) -> String {
    scene
        .faces()
        .enumerate()
        .fold(String::new(), |mut report, (i, face)| {
            // Writing into a String cannot fail.
            let _ = writeln!(report, "{}", face_line(i, face));
            report
        })
}

fn face_line(index: usize, face: FaceView<'_>) -> String {
    let vertex_indices = face
        .vertex_indices()
        .iter()
        .map(|index| (index + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let normal = match face.normal_index() {
        Some(normal_index) => format!("vn {}", normal_index + 1),
        None => "derived".to_owned(),
    };
    let consistency = if face.is_normal_consistent() {
        ""
    } else {
        " [inconsistent]"
    };

    format!(
        "face {index}: [{vertex_indices}] normal {:.4} ({normal}){consistency}",
        face.normal()
    )
}
