#![allow(dead_code)]

use deepeq_core::{inspect_composite, inspect_scalar, inspect_value, Inspect};
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Address {
    pub city: String,
    pub zip: Option<String>,
}

inspect_composite!(Address {
    city: String,
    zip: Option<String>,
});

#[derive(Debug, Clone)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub age: Option<u32>,
    pub address: Option<Address>,
    pub tags: Vec<String>,
}

inspect_composite!(Person {
    id: u64,
    name: String,
    age: Option<u32>,
    address: Option<Address>,
    tags: Vec<String>,
});

/// Same shape as `Person` minus `tags`, used for cross-type comparisons.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub age: Option<u32>,
    pub address: Option<Address>,
}

inspect_composite!(Contact {
    id: u64,
    name: String,
    age: Option<u32>,
    address: Option<Address>,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Draft,
    Active,
    Archived,
}

inspect_scalar!(Status);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    pub cents: i64,
    pub currency: [u8; 3],
}

inspect_value!(Money);

#[derive(Debug)]
pub struct Order {
    pub id: u64,
    pub status: Status,
    pub total: Money,
    pub lines: Vec<Line>,
}

inspect_composite!(Order {
    id: u64,
    status: Status,
    total: Money,
    lines: Vec<Line>,
});

#[derive(Debug, Clone)]
pub struct Line {
    pub sku: String,
    pub quantity: u32,
}

inspect_composite!(Line {
    sku: String,
    quantity: u32,
});

/// Holds a field declared as a trait object.
#[derive(Debug)]
pub struct Envelope {
    pub label: String,
    pub payload: Box<dyn Inspect>,
}

inspect_composite!(Envelope {
    label: String,
    payload: Box<dyn Inspect>,
});

/// Linked node that can close a cycle through `next`.
pub struct Node {
    pub name: String,
    pub next: OnceCell<Rc<Node>>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("name", &self.name).finish()
    }
}

inspect_composite!(Node {
    name: String,
    next: OnceCell<Rc<Node>>,
});

pub fn node(name: &str) -> Rc<Node> {
    Rc::new(Node {
        name: name.to_string(),
        next: OnceCell::new(),
    })
}

/// Two nodes pointing at each other.
pub fn ring(first: &str, second: &str) -> Rc<Node> {
    let a = node(first);
    let b = node(second);
    let _ = a.next.set(b.clone());
    let _ = b.next.set(a.clone());
    a
}

pub fn person(id: u64, name: &str, city: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        age: Some(42),
        address: Some(Address {
            city: city.to_string(),
            zip: None,
        }),
        tags: vec!["a".to_string(), "b".to_string()],
    }
}

pub fn order(id: u64, status: Status, skus: &[(&str, u32)]) -> Order {
    Order {
        id,
        status,
        total: Money {
            cents: 1250,
            currency: *b"EUR",
        },
        lines: skus
            .iter()
            .map(|(sku, quantity)| Line {
                sku: sku.to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}
