use notelist_core::{project, NavigationNode, ProjectionOptions, UNCATEGORIZED};
use std::collections::HashSet;

fn excluded(labels: &[&str]) -> HashSet<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

#[test]
fn category_posts_are_ordered_newest_first() {
    let tree = vec![NavigationNode::category(
        "2024",
        vec![
            NavigationNode::link("Post A", "/2024-03-15-post-a", "post-a"),
            NavigationNode::link("Post B", "/2024-06-01-post-b", "post-b"),
        ],
    )];

    let notes = project(&tree, &HashSet::new());

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].label, "Post B");
    assert_eq!(notes[0].date.as_deref(), Some("2024-06-01"));
    assert_eq!(notes[0].category, "2024");
    assert_eq!(notes[1].label, "Post A");
    assert_eq!(notes[1].date.as_deref(), Some("2024-03-15"));
    assert_eq!(notes[1].category, "2024");
}

#[test]
fn root_link_without_date_is_uncategorized() {
    let tree = vec![NavigationNode::link("Standalone", "/standalone", "standalone")];

    let notes = project(&tree, &HashSet::new());

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].category, UNCATEGORIZED);
    assert_eq!(notes[0].date, None);
    assert_eq!(notes[0].document_id.as_deref(), Some("standalone"));
}

#[test]
fn excluded_title_is_dropped_wherever_it_sits() {
    let tree = vec![
        NavigationNode::link("Tutorial", "/docs/tutorial", "root-tutorial"),
        NavigationNode::category(
            "Guides",
            vec![
                NavigationNode::category(
                    "Deep",
                    vec![NavigationNode::link("Tutorial", "/docs/deep/tutorial", "deep")],
                ),
                NavigationNode::link("Kept", "/docs/kept", "kept"),
            ],
        ),
    ];

    let notes = project(&tree, &excluded(&["Tutorial"]));

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].label, "Kept");
    assert!(notes.iter().all(|note| note.label != "Tutorial"));
}

#[test]
fn category_named_like_exclusion_keeps_its_notes() {
    let tree = vec![NavigationNode::category(
        "Tutorial",
        vec![NavigationNode::link("Basics", "/docs/basics", "basics")],
    )];

    let notes = project(&tree, &excluded(&["Tutorial"]));

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].category, "Tutorial");
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(project(&[], &excluded(&["Tutorial"])).is_empty());
}

#[test]
fn mixed_tree_puts_dated_notes_first_and_keeps_undated_order() {
    let tree = vec![
        NavigationNode::link("Intro", "/docs/intro", "intro"),
        NavigationNode::category(
            "Frontend",
            vec![
                NavigationNode::link("CSS tips", "/docs/css-tips", "css"),
                NavigationNode::link("React 19", "/docs/2025-01-10-react-19", "react"),
            ],
        ),
        NavigationNode::category(
            "Backend",
            vec![
                NavigationNode::link("Axum", "/docs/2024-11-02-axum", "axum"),
                NavigationNode::link("Typo date", "/docs/2024-13-40-typo", "typo"),
                NavigationNode::link("Postgres", "/docs/postgres", "pg"),
            ],
        ),
    ];

    let notes = project(&tree, &HashSet::new());
    let order: Vec<(&str, Option<&str>)> = notes
        .iter()
        .map(|note| (note.label.as_str(), note.date.as_deref()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("React 19", Some("2025-01-10")),
            ("Typo date", Some("2024-13-40")),
            ("Axum", Some("2024-11-02")),
            ("Intro", None),
            ("CSS tips", None),
            ("Postgres", None),
        ]
    );
}

#[test]
fn projecting_twice_gives_identical_output() {
    let tree = vec![NavigationNode::category(
        "2023",
        vec![
            NavigationNode::link("Same day 1", "/2023-05-05-a", "a"),
            NavigationNode::link("Same day 2", "/2023-05-05-b", "b"),
        ],
    )];
    let options = ProjectionOptions::default();

    let first = notelist_core::project_with(&tree, &options);
    let second = notelist_core::project_with(&tree, &options);

    assert_eq!(first, second);
    assert_eq!(first[0].label, "Same day 1");
    assert_eq!(first[1].label, "Same day 2");
}
