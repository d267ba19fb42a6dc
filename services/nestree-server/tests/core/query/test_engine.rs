// Integration tests for TreeQueryEngine over SQLite

use std::sync::Arc;

use crate::common::create_test_store;
use nestree::core::config::DescendantScope;
use nestree::core::error::NestreeError;
use nestree::core::params::ResolvedParams;
use nestree::core::query::{ChildrenOutcome, TreeQueryEngine};
use nestree::core::types::ChildSummary;

async fn engine(scope: DescendantScope) -> TreeQueryEngine {
    TreeQueryEngine::new(Arc::new(create_test_store().await), scope)
}

fn params(
    node_id: i64,
    language: &str,
    keyword: &str,
    page_num: i64,
    page_size: i64,
) -> ResolvedParams {
    ResolvedParams {
        node_id,
        language: language.to_string(),
        search_keyword: keyword.to_string(),
        page_num,
        page_size,
    }
}

fn page(outcome: ChildrenOutcome) -> Vec<ChildSummary> {
    match outcome {
        ChildrenOutcome::Page(nodes) => nodes,
        ChildrenOutcome::InvalidNode => panic!("expected a page"),
    }
}

#[tokio::test]
async fn test_fetch_children_with_counts() {
    let engine = engine(DescendantScope::All).await;
    let children = engine.fetch_children(2, "en").await.unwrap();

    let ids: Vec<i64> = children.iter().map(|c| c.node_id).collect();
    let counts: Vec<i64> = children.iter().map(|c| c.children_count).collect();
    assert_eq!(ids, vec![3, 4, 9, 10, 11]);
    assert_eq!(counts, vec![2, 0, 0, 1, 0]);
    assert_eq!(children[0].name.as_deref(), Some("Roots"));
    assert_eq!(children[4].name, None);
}

#[tokio::test]
async fn test_fetch_children_direct_scope() {
    let engine = engine(DescendantScope::Direct).await;
    let children = engine.fetch_children(1, "en").await.unwrap();

    let names: Vec<_> = children.iter().map(|c| c.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["Fruit", "Vegetables"]);
    assert_eq!(children[0].children_count, 3);
    assert_eq!(children[1].children_count, 5);
}

#[tokio::test]
async fn test_fetch_children_italian_names() {
    let engine = engine(DescendantScope::All).await;
    let children = engine.fetch_children(3, "it").await.unwrap();

    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name.as_deref(), Some("Carota"));
    assert_eq!(children[1].name, None);
}

#[tokio::test]
async fn test_fetch_node_info_missing() {
    let engine = engine(DescendantScope::All).await;
    let err = engine.fetch_node_info(999).await.unwrap_err();
    assert!(matches!(err, NestreeError::NodeNotFound(999)));
}

#[tokio::test]
async fn test_list_children_of_fruit() {
    let engine = engine(DescendantScope::All).await;
    let nodes = page(engine.list_children(&params(5, "en", "", 0, 100)).await.unwrap());

    let names: Vec<_> = nodes.iter().map(|c| c.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["Apple", "Banana", "Cherry"]);
    assert!(nodes.iter().all(|c| c.children_count == 0));
}

#[tokio::test]
async fn test_list_children_keyword_is_case_insensitive() {
    let engine = engine(DescendantScope::All).await;

    for keyword in ["an", "AN", "bAnAn"] {
        let nodes = page(engine.list_children(&params(5, "en", keyword, 0, 100)).await.unwrap());
        let ids: Vec<i64> = nodes.iter().map(|c| c.node_id).collect();
        assert_eq!(ids, vec![7], "keyword {keyword}");
    }
}

#[tokio::test]
async fn test_list_children_keyword_skips_unnamed() {
    let engine = engine(DescendantScope::All).await;
    let nodes = page(engine.list_children(&params(2, "it", "a", 0, 100)).await.unwrap());

    let ids: Vec<i64> = nodes.iter().map(|c| c.node_id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn test_list_children_pages_cover_the_list() {
    let engine = engine(DescendantScope::All).await;
    let all = page(engine.list_children(&params(1, "en", "", 0, 100)).await.unwrap());
    assert_eq!(all.len(), 10);

    let mut stitched = Vec::new();
    for page_num in 0..4 {
        stitched.extend(page(
            engine.list_children(&params(1, "en", "", page_num, 3)).await.unwrap(),
        ));
    }
    assert_eq!(stitched, all);

    let beyond = page(engine.list_children(&params(1, "en", "", 4, 3)).await.unwrap());
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_list_children_missing_node() {
    let engine = engine(DescendantScope::All).await;
    let outcome = engine.list_children(&params(999, "en", "", 0, 100)).await.unwrap();
    assert_eq!(outcome, ChildrenOutcome::InvalidNode);
}

#[tokio::test]
async fn test_list_children_store_closed() {
    let store = create_test_store().await;
    let engine = TreeQueryEngine::new(Arc::new(store.clone()), DescendantScope::All);
    store.pool().close().await;

    let err = engine.list_children(&params(5, "en", "", 0, 100)).await.unwrap_err();
    assert!(err.is_storage());
}
