mod coordinates;
mod errors;
mod face;
mod handle_unrecognized_line;
mod obj_builder;
mod record;

use coordinates::{parse_normal_line, parse_vertex_line};
use face::parse_face_line;
use handle_unrecognized_line::handle_unrecognized_line;
use obj_builder::ObjBuilder;
use record::Record;

pub use errors::{ObjParsingError, ObjParsingErrorDetail};

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

use crate::scene::{validate_normals, Scene};

pub struct ObjFile<'a>(pub &'a str);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail the parse when a face's normal disagrees with the normal computed
    /// from its vertices.
    pub validate_normals: bool,
}

impl ParseOptions {
    pub fn validate_normals(mut self, validate_normals: bool) -> Self {
        self.validate_normals = validate_normals;
        self
    }
}

/// Reads a whole OBJ stream into a [`Scene`].
///
/// Nothing is read until [`WavefrontParser::parse`] is first called. The
/// first call consumes the entire input and the outcome, a scene or the first
/// error met, is kept: later calls return it again.
pub struct WavefrontParser<R> {
    reader: BufReader<R>,
    options: ParseOptions,
    outcome: Option<Result<Scene, ObjParsingError>>,
}

impl<R: Read> WavefrontParser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParseOptions::default())
    }

    pub fn with_options(reader: R, options: ParseOptions) -> Self {
        Self {
            reader: BufReader::new(reader),
            options,
            outcome: None,
        }
    }

    pub fn parse(&mut self) -> Result<&Scene, &ObjParsingError> {
        self.outcome
            .get_or_insert_with(|| parse_scene(&mut self.reader, self.options))
            .as_ref()
    }

    /// The scene, once a call to [`WavefrontParser::parse`] succeeded.
    pub fn parsed_scene(&self) -> Option<&Scene> {
        self.outcome.as_ref()?.as_ref().ok()
    }

    pub fn into_scene(mut self) -> Result<Scene, ObjParsingError> {
        self.outcome
            .take()
            .unwrap_or_else(|| parse_scene(&mut self.reader, self.options))
    }
}

impl WavefrontParser<File> {
    pub fn open(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, ObjParsingError> {
        let file = File::open(path).map_err(|err| {
            ObjParsingError::from(ObjParsingErrorDetail::FailedToOpenFile(err))
        })?;
        Ok(Self::with_options(file, options))
    }
}

impl<R: Read> From<BufReader<R>> for WavefrontParser<R> {
    fn from(reader: BufReader<R>) -> Self {
        Self {
            reader,
            options: ParseOptions::default(),
            outcome: None,
        }
    }
}

impl<'a> TryFrom<ObjFile<'a>> for Scene {
    type Error = ObjParsingError;

    fn try_from(file_name: ObjFile<'a>) -> Result<Self, Self::Error> {
        WavefrontParser::open(file_name.0, ParseOptions::default())?.into_scene()
    }
}

impl<R> TryFrom<BufReader<R>> for Scene
where
    R: Read,
{
    type Error = ObjParsingError;

    fn try_from(buf_reader: BufReader<R>) -> Result<Self, ObjParsingError> {
        WavefrontParser::from(buf_reader).into_scene()
    }
}

impl FromStr for Scene {
    type Err = ObjParsingError;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        WavefrontParser::new(str.as_bytes()).into_scene()
    }
}

fn parse_scene<R: Read>(
    buf_reader: &mut BufReader<R>,
    options: ParseOptions,
) -> Result<Scene, ObjParsingError> {
    let mut obj_builder = ObjBuilder::default();

    for (line_count, line) in buf_reader.lines().enumerate() {
        let line = line.map_err(|err| {
            ObjParsingError::at_line(
                line_count,
                String::new(),
                ObjParsingErrorDetail::FailedToReadFile(err),
            )
        })?;

        parse_line(line_count, &line, &mut obj_builder)
            .map_err(|err| ObjParsingError::at_line(line_count, line, err))?;
    }

    let scene = obj_builder.build()?;

    if options.validate_normals {
        validate_normals(&scene).map_err(|err| {
            tracing::warn!("{err}");
            ObjParsingError::from(err)
        })?;
    }

    tracing::info!(
        vertices = scene.vertices().len(),
        normals = scene.normals().len(),
        faces = scene.face_count(),
        "parsed wavefront scene"
    );
    Ok(scene)
}

fn parse_line(
    line_count: usize,
    line: &str,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    match Record::from(line) {
        Record::Vertex(components) => parse_vertex_line(components, obj_builder),
        Record::Normal(components) => parse_normal_line(components, obj_builder),
        Record::Face(components) => parse_face_line(components, line_count, line, obj_builder),
        Record::Ignored { keyword } => {
            handle_unrecognized_line(keyword, line_count, line);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use linear_algebra::assert_approximately_equal;

    use super::*;

    const TRIANGLE_WITH_NORMAL: &str = "\
v 0 0 0
v 1 0 0
v 0 0 -1
vn 0 1 0
f 1//1 2//1 3//1
";

    #[test]
    fn parse_is_memoized() {
        let mut parser = WavefrontParser::new(TRIANGLE_WITH_NORMAL.as_bytes());
        assert!(parser.parsed_scene().is_none());

        let first = parser.parse().unwrap() as *const Scene;
        let second = parser.parse().unwrap() as *const Scene;
        assert_eq!(first, second);
        assert!(parser.parsed_scene().is_some());
    }

    #[test]
    fn failure_is_terminal() {
        let mut parser = WavefrontParser::new("v 1 2\n".as_bytes());
        assert_eq!(parser.parse().unwrap_err().line_index(), Some(0));
        assert_eq!(parser.parse().unwrap_err().line_index(), Some(0));
        assert!(parser.parsed_scene().is_none());
    }

    #[test]
    fn line_index_is_the_failing_line() {
        let input = "# header\nv 0 0 0\n\nv 1 0 0\nv 0 1\nv 0 0 1\n";
        let err = input.parse::<Scene>().unwrap_err();
        assert_eq!(err.line_index(), Some(4));
        assert_eq!(err.line_content(), Some("v 0 1"));
        assert!(err.to_string().contains("line 4"));
        assert!(matches!(
            err.detail(),
            ObjParsingErrorDetail::MalformedCoordinate { count: 2 }
        ));
    }

    #[test]
    fn builds_scene_from_buf_reader() {
        let scene = Scene::try_from(BufReader::new(TRIANGLE_WITH_NORMAL.as_bytes())).unwrap();
        assert_eq!(scene.vertices().len(), 3);
        assert_approximately_equal(scene.normals()[0], [0., 0., 1.].into());
        assert_eq!(scene.face(0).unwrap().normal_index(), Some(0));
    }

    #[test]
    fn validation_is_opt_in() {
        let input = TRIANGLE_WITH_NORMAL.replace("vn 0 1 0", "vn 0 -1 0");

        let scene: Scene = input.parse().unwrap();
        assert!(!scene.face(0).unwrap().is_normal_consistent());

        let options = ParseOptions::default().validate_normals(true);
        let err = WavefrontParser::with_options(input.as_bytes(), options)
            .into_scene()
            .unwrap_err();
        assert_eq!(err.line_index(), None);
        assert!(matches!(
            err.detail(),
            ObjParsingErrorDetail::InvalidNormals { face_index: 0 }
        ));
    }

    #[test]
    fn read_error_names_the_line_being_read() {
        let err = WavefrontParser::new(&b"v 0 0 0\nv 1 0 0\nv \xff 0 0\n"[..])
            .into_scene()
            .unwrap_err();
        assert_eq!(err.line_index(), Some(2));
        assert!(matches!(
            err.detail(),
            ObjParsingErrorDetail::FailedToReadFile(_)
        ));
    }

    #[test]
    fn missing_file_fails_to_open() {
        let err = Scene::try_from(ObjFile("this/file/does/not/exist.obj")).unwrap_err();
        assert!(matches!(
            err.detail(),
            ObjParsingErrorDetail::FailedToOpenFile(_)
        ));
    }
}
