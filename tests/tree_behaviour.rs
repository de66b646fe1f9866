//! Behaviour of the collapsible project tree.

use insta::assert_snapshot;
use pact_showcase::content::{project_structure, PROJECT_NAME};
use pact_showcase::tree::{format_outline, Disclosure, Icons, NodePath, TreeNode, TreeView};

fn view() -> TreeView {
    TreeView::new(project_structure())
}

fn visible(view: &TreeView) -> Vec<String> {
    view.rows().into_iter().map(|r| r.name).collect()
}

fn path(view: &TreeView, name: &str) -> NodePath {
    view.find(name).unwrap_or_else(|| panic!("no node named {}", name))
}

#[test]
fn test_initial_outline() {
    let output = format_outline(&view().rows(), &Icons::ASCII);
    assert_snapshot!(output, @r"
    v [d] spring-kafka-pact-demo
      > [d] src
        [f] pom.xml
        [f] README.md
    ");
}

#[test]
fn test_src_then_main_scenario() {
    let mut view = view();

    let names = visible(&view);
    assert!(names.contains(&PROJECT_NAME.to_string()));
    assert!(names.contains(&"src".to_string()));
    assert!(!names.contains(&"main".to_string()));

    let src = path(&view, "src");
    assert!(view.toggle(&src));

    let names = visible(&view);
    assert_eq!(
        names,
        vec![PROJECT_NAME, "src", "main", "test", "pom.xml", "README.md"]
    );
    let main = path(&view, "main");
    assert_eq!(view.is_expanded(&main), Some(false));

    assert!(view.toggle(&main));
    let names = visible(&view);
    assert_eq!(
        names,
        vec![
            PROJECT_NAME,
            "src",
            "main",
            "java/com/example/demo",
            "resources",
            "test",
            "pom.xml",
            "README.md",
        ]
    );
}

#[test]
fn test_deep_folders_start_collapsed() {
    let view = view();
    let mut stack = vec![NodePath::root()];

    while let Some(p) = stack.pop() {
        let node = view.node(&p).unwrap();
        if node.is_folder() {
            assert_eq!(view.is_expanded(&p), Some(p.depth() < 1), "{}", node.name());
        }
        for i in 0..node.children().len() {
            stack.push(p.child(i));
        }
    }
}

#[test]
fn test_toggle_leaves_siblings_and_ancestors_alone() {
    let mut view = TreeView::with_expand_depth(project_structure(), 2);
    let main = path(&view, "main");
    let test = NodePath::from(vec![0, 1]);

    view.toggle(&main);

    assert_eq!(view.is_expanded(&main), Some(true));
    assert_eq!(view.is_expanded(&test), Some(false));
    assert_eq!(view.is_expanded(&NodePath::from(vec![0])), Some(true));
    assert_eq!(view.is_expanded(&NodePath::root()), Some(true));
}

#[test]
fn test_double_toggle_is_identity() {
    let mut view = view();
    view.expand_all();
    let before = view.rows();

    for row in before.iter().filter(|r| r.is_folder()) {
        view.toggle(&row.path);
        view.toggle(&row.path);
        assert_eq!(view.rows(), before, "after double toggle of {}", row.name);
    }
}

#[test]
fn test_files_never_toggle() {
    let mut view = view();
    view.expand_all();
    let before = view.rows();

    for row in before.iter().filter(|r| !r.is_folder()) {
        assert!(row.disclosure().is_none());
        assert!(!view.toggle(&row.path));
    }
    assert_eq!(view.rows(), before);
}

#[test]
fn test_children_keep_input_order() {
    let mut view = view();
    view.expand_all();

    let service = path(&view, "service");
    let children: Vec<_> = view
        .rows()
        .into_iter()
        .filter(|r| r.depth == service.depth() + 1 && r.path.as_slice().starts_with(service.as_slice()))
        .map(|r| r.name)
        .collect();

    assert_eq!(children, vec!["MessageService.java", "MessageServiceImpl.java"]);

    // README.md sorts before pom.xml alphabetically but is listed after it
    let top: Vec<_> = view
        .rows()
        .into_iter()
        .filter(|r| r.depth == 1)
        .map(|r| r.name)
        .collect();
    assert_eq!(top, vec!["src", "pom.xml", "README.md"]);
}

#[test]
fn test_empty_folder_has_marker_but_no_children() {
    let root = TreeNode::folder(
        "root",
        vec![TreeNode::folder("a", vec![TreeNode::folder("empty", vec![])])],
    );
    let mut view = TreeView::new(root);
    view.toggle(&NodePath::from(vec![0]));

    let rows = view.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].name, "empty");
    assert_eq!(rows[2].disclosure(), Some(Disclosure::Collapsed));

    let empty = rows[2].path.clone();
    assert!(view.toggle(&empty));

    let rows = view.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].disclosure(), Some(Disclosure::Expanded));
    assert_eq!(
        format_outline(&rows[2..], &Icons::ASCII),
        "    v [d] empty\n"
    );

    view.expand_all();
    assert_eq!(view.rows().len(), 3);
}
