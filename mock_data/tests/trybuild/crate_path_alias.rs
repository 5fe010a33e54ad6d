use mock_data::MockData;

/// Verifies that `#[mock_data(crate = "mock_data")]` is accepted and the
/// generated code compiles. Uses the real crate name as a self-referential
/// alias so no workspace reconfiguration is needed.
#[derive(Debug, MockData)]
#[mock_data(crate = "mock_data")]
struct CratePathFixture {
    value: String,
    count: u32,
    link: url::Url,
}

fn main() {
    let fixture = CratePathFixture::mock_data_with(CratePathFixtureMockOverrides {
        count: Some(1),
        ..Default::default()
    });
    assert_eq!(fixture.count, 1);
    assert!(fixture.value.is_empty());
    assert_eq!(fixture.link.as_str(), mock_data::placeholder::PLACEHOLDER_URL);
}
