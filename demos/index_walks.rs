//! Index Walks
//!
//! This example walks indices "from here, forever".
//!
//! Key concepts:
//! - Integers are bidirectional and walk via their predecessor
//! - Forward-only index types walk from the seed directly
//! - Both paths yield the seed first
//!
//! Run with: cargo run --example index_walks

use endless::core::ForwardIndex;
use endless::{forever_index, Forever, Generator, LazySequence};

/// Position in a singly linked chain of pages; there is no way back.
#[derive(Clone, Debug, PartialEq)]
struct PageCursor {
    page: u32,
}

impl ForwardIndex for PageCursor {
    fn successor(&self) -> Self {
        PageCursor {
            page: self.page + 1,
        }
    }
}

forever_index! {
    forward: [PageCursor]
}

fn main() {
    println!("=== Index Walks Example ===\n");

    let words = ["alpha", "beta", "gamma", "delta"];
    for (line, word) in 2usize.forever().into_iter().zip(words) {
        println!("{line}: {word}");
    }

    let mut cursor = PageCursor { page: 1 }.forever().generate();
    println!("First page: {:?}", cursor.pull());
    println!("Next page: {:?}", cursor.pull());

    println!("\n=== Example Complete ===");
}
