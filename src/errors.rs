use rs42::error_struct_custom_display;
use scene::ObjParsingError;

error_struct_custom_display!(
    FailedToLoadScene {
        path: String,
        err: ObjParsingError,
    },
    "Failed to load scene from \"{}\": {}",
    path,
    err
);
