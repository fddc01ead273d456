use friendships::{DuplicatePolicy, FriendshipRegistry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), friendships::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut people = FriendshipRegistry::with_policy(DuplicatePolicy::Ignore);
    people.register_friendship("Alice", "Bob")?;
    people.register_friendship("Bob", "Alice")?; // no-op
    people.register_friendship("Alice", "Carol")?;

    assert_eq!(people.friends_of("Alice")?, ["Bob", "Carol"]);
    assert_eq!(people.friends_of("Bob")?, ["Alice"]);
    assert!(!people.are_friends("Bob", "Carol")?);
    assert!(people.friends_of("Dave")?.is_empty());

    if let Err(err) = people.register_friendship("Alice", "  ") {
        tracing::info!(%err, "rejected");
    }
    Ok(())
}
