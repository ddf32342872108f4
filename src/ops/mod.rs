mod patch;

pub use patch::{
    DEPENDENCIES_OPENER, PatchAction, PatchOutcome, contains_package, insert_package,
    patch_manifest, patch_package, replace_package,
};
