//! Route path canonicalization and composition.

/// Canonicalize a path fragment.
///
/// - empty → `/`
/// - leading `/` added when missing
/// - runs of `//` collapsed
/// - trailing `/` stripped unless the result is exactly `/`
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut result = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    while result.contains("//") {
        result = result.replace("//", "/");
    }

    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }

    result
}

/// Join a class-level base path with a method-level fragment.
///
/// Either side may be empty or written with stray slashes; the result is
/// always normalized.
pub fn join(base: &str, fragment: &str) -> String {
    match (base.is_empty(), fragment.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => normalize(base),
        (true, false) => normalize(fragment),
        (false, false) => {
            let base = base.strip_suffix('/').unwrap_or(base);
            let fragment = fragment.strip_prefix('/').unwrap_or(fragment);
            normalize(&format!("{}/{}", base, fragment))
        }
    }
}
