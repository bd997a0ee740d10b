//! Capability detection tests against simulated hosts.
//!
//! These live next to the widget tests because they need the mock host.

use horizontally_core::{
    CapabilityFlags, Dimension, Environment, Platform, StyleSurface, VendorPrefix,
};
use horizontally_test_utils::user_agents::{DESKTOP_FIREFOX, IPAD_SAFARI};
use horizontally_test_utils::{HostCall, MockPlatform};

fn overflow_of(platform: &MockPlatform) -> Option<String> {
    platform.root().style_value("overflow")
}

#[test]
fn test_full_support_flags() {
    let env = Environment::new(MockPlatform::new().with_user_agent(DESKTOP_FIREFOX));

    assert_eq!(env.flags(), CapabilityFlags::all());
    assert_eq!(env.transform_prefix(), Some(VendorPrefix::Unprefixed));
}

#[test]
fn test_mobile_flags() {
    let env = Environment::new(MockPlatform::new().with_user_agent(IPAD_SAFARI));
    assert!(!env.flags().contains(CapabilityFlags::DESKTOP));
    assert!(env.flags().contains(CapabilityFlags::ORIENTATION));
}

#[test]
fn test_vendor_transform_detection() {
    let env = Environment::new(MockPlatform::new().with_transform_fields(&["msTransform"]));

    assert_eq!(env.transform_prefix(), Some(VendorPrefix::Ms));
    assert!(env.supports_transform(Dimension::TwoD));
}

#[test]
fn test_no_transform_support() {
    let env = Environment::new(MockPlatform::new().without_transform());

    assert!(!env.supports_transform(Dimension::TwoD));
    assert!(!env.supports_transform(Dimension::ThreeD));
    assert_eq!(env.transform_prefix(), None);
}

#[test]
fn test_3d_rejected_by_engine() {
    let env = Environment::new(MockPlatform::new().without_3d());

    assert!(env.supports_transform(Dimension::TwoD));
    assert!(!env.supports_transform(Dimension::ThreeD));
}

#[test]
fn test_3d_probe_uses_vendor_names() {
    let env = Environment::new(MockPlatform::new().with_transform_fields(&["webkitTransform"]));

    assert!(env.supports_transform(Dimension::ThreeD));
    assert!(env.platform().calls().iter().any(|call| matches!(
        call,
        HostCall::ComputedStyle { css_name, .. } if css_name == "-webkit-transform"
    )));
}

#[test]
fn test_3d_probe_with_ms_prefix() {
    let env = Environment::new(MockPlatform::new().with_transform_fields(&["msTransform"]));

    assert_eq!(env.transform_prefix(), Some(VendorPrefix::Ms));
    assert!(env.supports_transform(Dimension::ThreeD));
    assert!(env.platform().calls().iter().any(|call| matches!(
        call,
        HostCall::ComputedStyle { css_name, .. } if css_name == "-ms-transform"
    )));
}

#[test]
fn test_3d_probe_restores_existing_body() {
    let platform = MockPlatform::new();
    let body = platform.body().unwrap();
    body.set_property("overflow", "scroll");
    let children_before = body.child_ids();
    let root_children_before = platform.root().child_ids();

    let env = Environment::new(platform);
    assert!(env.supports_transform(Dimension::ThreeD));

    let body = env.platform().body().unwrap();
    assert_eq!(body.child_ids(), children_before);
    assert_eq!(body.style_value("overflow").as_deref(), Some("scroll"));
    assert_eq!(env.platform().root().child_ids(), root_children_before);
    assert_eq!(overflow_of(env.platform()), None);
}

#[test]
fn test_3d_probe_without_body_leaves_no_body() {
    let platform = MockPlatform::new().without_body();
    platform.root().set_property("overflow", "auto");

    let env = Environment::new(platform);
    assert!(env.supports_transform(Dimension::ThreeD));

    assert!(env.platform().body().is_none());
    assert!(env.platform().root().child_ids().is_empty());
    assert_eq!(overflow_of(env.platform()).as_deref(), Some("auto"));

    // A temporary body was attached and detached again.
    let calls = env.platform().calls();
    assert!(calls.iter().any(|call| matches!(
        call,
        HostCall::CreateElement { tag, .. } if tag == "body"
    )));
}

#[test]
fn test_detection_is_memoized() {
    let env = Environment::new(MockPlatform::new());
    env.flags();
    let calls = env.platform().call_count();
    let probes = env.platform().probe_count();

    env.flags();
    assert!(env.supports_transform(Dimension::ThreeD));

    assert_eq!(env.platform().call_count(), calls);
    assert_eq!(env.platform().probe_count(), probes);
}

#[test]
fn test_no_orientation_support() {
    let env = Environment::new(MockPlatform::new().without_orientation());
    assert!(!env.supports_orientation());
    assert!(!env.flags().contains(CapabilityFlags::ORIENTATION));
}
