#![allow(dead_code)]

use sincecheck_core::{Element, ElementKey, ElementKind, InMemoryLoader, Snapshot, Version};
use sincecheck_store::write_snapshot_file;
use std::path::Path;

pub fn version(token: &str) -> Version {
    Version::parse(token).unwrap()
}

/// Module `module` exporting `api.Api`, both tagged `@since 9`
pub fn api_v9(module: &str) -> Snapshot {
    Snapshot::builder(module, version("9"))
        .element(Element::new(ElementKind::Module, module).with_since("9"))
        .element(
            Element::new(ElementKind::Class, "api.Api")
                .with_since("9")
                .enclosed_by(ElementKey::new(ElementKind::Module, module)),
        )
        .build()
        .unwrap()
}

/// `api_v9` plus method `test()` tagged with `method_since` (or untagged)
pub fn api_v10(module: &str, method_since: Option<&str>) -> Snapshot {
    let mut method = Element::new(ElementKind::Method, "api.Api:test:()")
        .enclosed_by(ElementKey::new(ElementKind::Class, "api.Api"));
    if let Some(since) = method_since {
        method = method.with_since(since);
    }
    Snapshot::builder(module, version("10"))
        .element(Element::new(ElementKind::Module, module).with_since("9"))
        .element(
            Element::new(ElementKind::Class, "api.Api")
                .with_since("9")
                .enclosed_by(ElementKey::new(ElementKind::Module, module)),
        )
        .element(method)
        .build()
        .unwrap()
}

/// Loader holding both analyzed versions; verify falls back to version 10
pub fn api_loader(module: &str, method_since: Option<&str>) -> InMemoryLoader {
    InMemoryLoader::new()
        .with_snapshot(api_v9(module))
        .with_snapshot(api_v10(module, method_since))
}

/// Write `<root>/9/test.snapshot.json` and `<root>/10/test.snapshot.json`
pub fn write_api_tree(root: &Path, method_since: Option<&str>) {
    write_snapshot_file(&api_v9("test"), &root.join("9").join("test.snapshot.json")).unwrap();
    write_snapshot_file(
        &api_v10("test", method_since),
        &root.join("10").join("test.snapshot.json"),
    )
    .unwrap();
}
