use super::*;

#[test]
fn test_table_names() {
    assert_eq!(Table::StagingEvents.name(), "staging_events");
    assert_eq!(Table::Songplays.name(), "songplays");
    assert_eq!(Table::Time.name(), "time");
    assert_eq!(Table::Users.to_string(), "users");
}

#[test]
fn test_staging_classification() {
    assert!(Table::StagingEvents.is_staging());
    assert!(Table::StagingSongs.is_staging());
    assert!(!Table::Songplays.is_staging());
    assert!(!Table::Artists.is_staging());
}

#[test]
fn test_drop_and_create_cover_all_tables() {
    // Both DDL lists touch every managed table exactly once.
    for order in [&DROP_ORDER, &CREATE_ORDER] {
        let mut seen = std::collections::HashSet::new();
        for table in order {
            assert!(seen.insert(table.name()), "duplicate {}", table);
        }
        assert_eq!(seen.len(), 7);
    }
}

#[test]
fn test_copy_order_is_staging_only() {
    assert_eq!(COPY_ORDER.map(|t| t.name()), ["staging_events", "staging_songs"]);
    assert!(COPY_ORDER.iter().all(Table::is_staging));
}

#[test]
fn test_insert_order_fact_first() {
    // The fact table is populated before the dimensions that hang off it;
    // time in particular reads songplays.start_time.
    assert_eq!(
        INSERT_ORDER.map(|t| t.name()),
        ["songplays", "users", "songs", "artists", "time"]
    );
}
