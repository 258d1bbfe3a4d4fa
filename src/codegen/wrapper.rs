//! Image-loading bindings for the generated enums.
//!
//! Both wrapper files bind the same set of enum types; only the host API
//! differs. [`WrapperKind`] carries the per-API text so a single renderer
//! produces either file.

use super::{EnumTypeInfo, GENERATED_HEADER};

/// Host image API a wrapper file targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    /// `UIImage(asset:)`, guarded by `#if canImport(UIKit)`.
    UiKit,
    /// SwiftUI `Image(asset:)`.
    SwiftUi,
}

impl WrapperKind {
    pub const ALL: [WrapperKind; 2] = [WrapperKind::UiKit, WrapperKind::SwiftUi];

    pub fn name(self) -> &'static str {
        match self {
            WrapperKind::UiKit => "uikit",
            WrapperKind::SwiftUi => "swiftui",
        }
    }

    fn prelude(self) -> &'static str {
        match self {
            WrapperKind::UiKit => "#if canImport(UIKit)\nimport UIKit\n",
            WrapperKind::SwiftUi => "import SwiftUI\n",
        }
    }

    fn epilogue(self) -> &'static str {
        match self {
            WrapperKind::UiKit => "\n#endif\n",
            WrapperKind::SwiftUi => "",
        }
    }

    /// One extension binding `type_path` to the host loader.
    fn binding(self, type_path: &str) -> String {
        match self {
            WrapperKind::UiKit => format!(
                "\nextension UIImage {{\n    convenience init?(asset: {}) {{\n        self.init(named: asset.rawValue)\n    }}\n}}\n",
                type_path
            ),
            WrapperKind::SwiftUi => format!(
                "\nextension Image {{\n    init(asset: {}) {{\n        self.init(asset.rawValue)\n    }}\n}}\n",
                type_path
            ),
        }
    }

    /// Render the whole wrapper file: the top-level type first, then every
    /// nested type in the given order.
    pub fn render(self, top_level: &str, enum_types: &[EnumTypeInfo]) -> String {
        let mut code = String::new();
        code.push_str(GENERATED_HEADER);
        code.push_str(self.prelude());
        code.push_str(&self.binding(top_level));
        for info in enum_types {
            code.push_str(&self.binding(&info.enum_path));
        }
        code.push_str(self.epilogue());
        code
    }
}
