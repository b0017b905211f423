//! crypto-bmark version metadata.

/// Product name printed by `--version` and used as the parser's binary name.
pub const PRODUCT_NAME: &str = "crypto-bmark";

/// Version injected at build time through `DISTRIBUTION_VERSION`.
pub const DISTRIBUTION_VERSION: &str = resolve(option_env!("DISTRIBUTION_VERSION"));

/// Falls back to "Unknown" when no version was injected.
const fn resolve(injected: Option<&'static str>) -> &'static str {
    match injected {
        Some(version) if !version.is_empty() => version,
        _ => "Unknown",
    }
}

/// Returns true if any argument asks for the version.
pub fn requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .any(|arg| matches!(arg.as_ref(), "-V" | "--version"))
}

/// The `<product> version <version>` line.
pub fn banner() -> String {
    format!("{} version {}", PRODUCT_NAME, DISTRIBUTION_VERSION)
}
