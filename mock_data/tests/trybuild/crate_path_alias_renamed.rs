//! Trybuild fixture verifying `#[mock_data(crate = "...")]` works with a
//! genuine rename via `use ... as`.

use mock_data as fixtures;
use fixtures::MockData;

/// Verifies that `#[mock_data(crate = "fixtures")]` generates code that
/// references the trait and placeholders through the aliased name.
#[derive(Debug, MockData)]
#[mock_data(crate = "fixtures")]
struct AliasedFixture {
    id: uuid::Uuid,
    nested: Nested,
}

#[derive(Debug, MockData)]
#[mock_data(crate = "fixtures")]
enum Nested {
    First,
    Second,
}

fn main() {
    let fixture = <AliasedFixture as fixtures::MockData>::mock_data();
    assert!(matches!(fixture.nested, Nested::First));
    assert_ne!(fixture.id, AliasedFixture::mock_data().id);
    let _unused = Nested::Second;
}
