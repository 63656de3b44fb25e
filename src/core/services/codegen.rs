//! Statement builders for generated modules
//!
//! Every statement the generator emits comes from one of these pure
//! functions, so quoting (JSON string literals) lives in one place.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::ModuleType;

static NON_IDENTIFIER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_$]").expect("identifier regex is valid"));

/// Closing line of a `module.exports = {` spread object
pub const SPREAD_OBJECT_CLOSE: &str = "};";

/// Closing line of a default export object
pub const EXPORT_OBJECT_CLOSE: &str = "}";

/// Quote a string as a JSON (and therefore JS) string literal
#[must_use]
pub fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Identifier for a path: `__` followed by the path with every character
/// outside `[A-Za-z0-9_$]` replaced by `_`
///
/// Distinct paths may collide (`a-b.ts` and `a_b.ts`); that is not resolved.
#[must_use]
pub fn identifier(path: &str) -> String {
    format!("__{}", NON_IDENTIFIER_CHARS.replace_all(path, "_"))
}

/// `export * from "<target>";`
#[must_use]
pub fn wildcard_reexport(target: &str) -> String {
    format!("export * from {};", string_literal(target))
}

/// `...require("<target>"),` - one member of a spread-merged exports object
#[must_use]
pub fn spread_require(target: &str) -> String {
    format!("...require({}),", string_literal(target))
}

/// Bind a module namespace to `ident`
///
/// - module: `import * as <ident> from "<target>";`
/// - commonjs: `const <ident> = require("<target>");`
#[must_use]
pub fn namespace_binding(module_type: ModuleType, ident: &str, target: &str) -> String {
    match module_type {
        ModuleType::Module => format!("import * as {ident} from {};", string_literal(target)),
        ModuleType::Commonjs => format!("const {ident} = require({});", string_literal(target)),
    }
}

/// Opening line of the module's exported object
#[must_use]
pub const fn export_object_open(module_type: ModuleType) -> &'static str {
    match module_type {
        ModuleType::Module => "export default {",
        ModuleType::Commonjs => "module.exports = {",
    }
}

/// `"<key>": <value>,` - one object literal entry with a quoted key
#[must_use]
pub fn object_entry(key: &str, value: &str) -> String {
    format!("{}: {value},", string_literal(key))
}
