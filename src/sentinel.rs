//! The sentinel function: the build-time marker the transformer rewrites.
//!
//! At runtime the function only throws, so a call that reaches a browser
//! means the transformer was not configured.

pub const SENTINEL_MODULE: &str = "ts-transformer-svg-jsx";
pub const SENTINEL_FUNCTION: &str = "svgToJsx";

pub const MISCONFIGURATION_MESSAGE: &str =
    "Do not use svgToJsx directly. Please make sure ts-transformer-svg-jsx is set up properly.";

/// CommonJS source of the runtime stub.
pub fn runtime_source() -> String {
    format!(
        "\"use strict\";\n\
         Object.defineProperty(exports, \"__esModule\", {{ value: true }});\n\
         exports.{name} = void 0;\n\
         function {name}(path) {{\n\
         \x20 throw new Error({message:?});\n\
         }}\n\
         exports.{name} = {name};\n",
        name = SENTINEL_FUNCTION,
        message = MISCONFIGURATION_MESSAGE,
    )
}

/// Type declarations for editors.
pub fn declaration_source() -> String {
    format!(
        "import type {{ SVGFactory }} from \"react\";\n\n\
         export declare function {name}(path: string): SVGFactory;\n",
        name = SENTINEL_FUNCTION,
    )
}
