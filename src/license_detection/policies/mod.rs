pub mod manifest_license_policy;

pub use manifest_license_policy::ManifestLicensePolicy;
