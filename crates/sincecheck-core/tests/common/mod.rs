use sincecheck_core::{Element, ElementKey, ElementKind, Snapshot, Version};

pub fn version(token: &str) -> Version {
    Version::parse(token).unwrap()
}

pub fn module_key() -> ElementKey {
    ElementKey::new(ElementKind::Module, "test")
}

pub fn api_key() -> ElementKey {
    ElementKey::new(ElementKind::Class, "api.Api")
}

/// Module `test` exporting `api.Api`, both tagged `@since 9`, no members
#[allow(dead_code)]
pub fn api_v9() -> Snapshot {
    Snapshot::builder("test", version("9"))
        .element(Element::new(ElementKind::Module, "test").with_since("9"))
        .element(
            Element::new(ElementKind::Class, "api.Api")
                .with_since("9")
                .enclosed_by(module_key()),
        )
        .build()
        .unwrap()
}

/// `api_v9` plus method `test()`, tagged with `method_since` (or untagged)
#[allow(dead_code)]
pub fn api_v10(method_since: Option<&str>) -> Snapshot {
    let mut method = Element::new(ElementKind::Method, "api.Api:test:()").enclosed_by(api_key());
    if let Some(since) = method_since {
        method = method.with_since(since);
    }
    Snapshot::builder("test", version("10"))
        .element(Element::new(ElementKind::Module, "test").with_since("9"))
        .element(
            Element::new(ElementKind::Class, "api.Api")
                .with_since("9")
                .enclosed_by(module_key()),
        )
        .element(method)
        .build()
        .unwrap()
}
