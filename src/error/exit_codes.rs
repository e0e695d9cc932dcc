use crate::error::MokkaError;

pub fn get_exit_code(error: &MokkaError) -> i32 {
    match error {
        MokkaError::InvalidVersionSpec(_) | MokkaError::UnknownPackageType(_) => 2,

        MokkaError::NoSatisfiedVersion { .. } => 3,

        MokkaError::ManifestFetch { .. } | MokkaError::Http(_) | MokkaError::Download(_) => 20,

        _ => 1,
    }
}
