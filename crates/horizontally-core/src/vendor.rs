//! Vendor-prefixed style property names.

/// A vendor prefix variant, tried in [`VendorPrefix::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorPrefix {
    Unprefixed,
    Webkit,
    Moz,
    O,
    Ms,
}

impl VendorPrefix {
    /// Probe order. The first variant the host accepts wins.
    pub const ALL: [VendorPrefix; 5] = [
        VendorPrefix::Unprefixed,
        VendorPrefix::Webkit,
        VendorPrefix::Moz,
        VendorPrefix::O,
        VendorPrefix::Ms,
    ];

    /// Prefix used in dashed CSS names (`-webkit-`).
    pub const fn css_prefix(self) -> &'static str {
        match self {
            VendorPrefix::Unprefixed => "",
            VendorPrefix::Webkit => "-webkit-",
            VendorPrefix::Moz => "-moz-",
            VendorPrefix::O => "-o-",
            VendorPrefix::Ms => "-ms-",
        }
    }

    /// Prefix used in DOM style property names (`webkit`, `Moz`).
    pub const fn dom_prefix(self) -> &'static str {
        match self {
            VendorPrefix::Unprefixed => "",
            VendorPrefix::Webkit => "webkit",
            VendorPrefix::Moz => "Moz",
            VendorPrefix::O => "O",
            VendorPrefix::Ms => "ms",
        }
    }

    /// Dashed CSS name for a logical property, e.g. `-moz-transform`.
    pub fn css_name(self, logical: &str) -> String {
        format!("{}{}", self.css_prefix(), logical)
    }

    /// DOM style property name for a logical property.
    ///
    /// `transform-origin` becomes `transformOrigin`, `webkitTransformOrigin`,
    /// `MozTransformOrigin` and so on.
    pub fn dom_name(self, logical: &str) -> String {
        match self {
            VendorPrefix::Unprefixed => camel_case(logical),
            prefix => camel_case(&format!("{}-{}", prefix.dom_prefix(), logical)),
        }
    }
}

/// Convert a dashed name to camel case.
///
/// Every run of dashes is dropped and the character after it is upper
/// cased, so `-webkit-transform` becomes `WebkitTransform`.
pub fn camel_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '-' {
            out.push(ch);
            continue;
        }
        while chars.next_if_eq(&'-').is_some() {}
        if let Some(next) = chars.next() {
            out.extend(next.to_uppercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("transform"), "transform");
        assert_eq!(camel_case("transform-origin"), "transformOrigin");
        assert_eq!(camel_case("-webkit-transform"), "WebkitTransform");
        assert_eq!(camel_case("a--b"), "aB");
        assert_eq!(camel_case("trailing-"), "trailing");
    }

    #[test]
    fn test_dom_names() {
        let names: Vec<String> = VendorPrefix::ALL
            .iter()
            .map(|prefix| prefix.dom_name("transform"))
            .collect();
        assert_eq!(
            names,
            [
                "transform",
                "webkitTransform",
                "MozTransform",
                "OTransform",
                "msTransform"
            ]
        );
        assert_eq!(
            VendorPrefix::Webkit.dom_name("transform-origin"),
            "webkitTransformOrigin"
        );
    }

    #[test]
    fn test_css_names() {
        assert_eq!(VendorPrefix::Unprefixed.css_name("transform"), "transform");
        assert_eq!(VendorPrefix::Ms.css_name("transform"), "-ms-transform");
    }
}
