// Test fixtures: a small produce catalogue stored as a nested set
//
// 1 Root (1..22)
// ├── 5 Fruit (2..9)
// │   ├── 6 Apple (3..4)
// │   ├── 7 Banana (5..6)
// │   └── 8 Cherry (7..8)
// └── 2 Vegetables (10..21)
//     ├── 3 Roots (11..16)
//     │   ├── 4 Carrot (12..13)
//     │   └── 9 Beet (14..15)        no Italian name
//     └── 10 Leaves (17..20)
//         └── 11 Spinach (18..19)    no names at all

use nestree::core::types::Node;
use sqlx::AnyPool;

/// (id, level, left, right)
#[allow(dead_code)]
pub const PRODUCE_NODES: &[(i64, i64, i64, i64)] = &[
    (1, 0, 1, 22),
    (5, 1, 2, 9),
    (6, 2, 3, 4),
    (7, 2, 5, 6),
    (8, 2, 7, 8),
    (2, 1, 10, 21),
    (3, 2, 11, 16),
    (4, 3, 12, 13),
    (9, 3, 14, 15),
    (10, 2, 17, 20),
    (11, 3, 18, 19),
];

/// (id, language, name)
#[allow(dead_code)]
pub const PRODUCE_NAMES: &[(i64, &str, &str)] = &[
    (1, "en", "Root"),
    (1, "it", "Radice"),
    (5, "en", "Fruit"),
    (5, "it", "Frutta"),
    (6, "en", "Apple"),
    (6, "it", "Mela"),
    (7, "en", "Banana"),
    (7, "it", "Banana"),
    (8, "en", "Cherry"),
    (8, "it", "Ciliegia"),
    (2, "en", "Vegetables"),
    (2, "it", "Verdura"),
    (3, "en", "Roots"),
    (3, "it", "Radici"),
    (4, "en", "Carrot"),
    (4, "it", "Carota"),
    (9, "en", "Beet"),
    (10, "en", "Leaves"),
    (10, "it", "Foglie"),
];

/// In-memory view of the seeded tree, for computing expected answers
#[allow(dead_code)]
pub struct TreeFixture {
    pub nodes: Vec<Node>,
}

#[allow(dead_code)]
impl TreeFixture {
    pub fn produce() -> Self {
        let nodes = PRODUCE_NODES
            .iter()
            .map(|&(id, level, left, right)| Node {
                id,
                level,
                left,
                right,
            })
            .collect();
        Self { nodes }
    }

    pub fn node(&self, id: i64) -> Node {
        *self
            .nodes
            .iter()
            .find(|n| n.id == id)
            .unwrap_or_else(|| panic!("fixture has no node {id}"))
    }

    /// Strict descendants of `id`, ordered by left marker
    pub fn descendants(&self, id: i64) -> Vec<Node> {
        let parent = self.node(id);
        let mut found: Vec<Node> = self
            .nodes
            .iter()
            .filter(|n| parent.contains(n))
            .copied()
            .collect();
        found.sort_by_key(|n| n.left);
        found
    }
}

/// Insert the produce tree into an empty schema
#[allow(dead_code)]
pub async fn seed_produce_tree(pool: &AnyPool) {
    for &(id, level, left, right) in PRODUCE_NODES {
        sqlx::query("INSERT INTO node_tree (idNode, level, iLeft, iRight) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(level)
            .bind(left)
            .bind(right)
            .execute(pool)
            .await
            .expect("Failed to insert node");
    }

    for &(id, language, name) in PRODUCE_NAMES {
        sqlx::query("INSERT INTO node_tree_names (idNode, language, nodeName) VALUES (?, ?, ?)")
            .bind(id)
            .bind(language)
            .bind(name)
            .execute(pool)
            .await
            .expect("Failed to insert node name");
    }
}
