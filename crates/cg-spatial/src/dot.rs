//! Graphviz export of the tree shape.
//!
//! Each node is labelled with its kind, priority, hit count and truncated
//! coordinates and filled with the kind's colour.  Useful for eyeballing how
//! promotions reshape the tree.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::treap::{Node, SpatialTreap};

impl<P> SpatialTreap<P> {
    /// Write the tree as an undirected DOT graph.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "graph G {{")?;
        writeln!(out, "\trankdir=TB;")?;
        writeln!(out, "\tnode [shape=circle];")?;

        // Names are pre-order positions; entity ids need not be unique.
        let mut next = 0usize;
        let mut stack: Vec<(&Node<P>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            write_node(out, root, next)?;
            stack.push((root, next));
            next += 1;
        }
        while let Some((node, name)) = stack.pop() {
            for child in [node.right.as_deref(), node.left.as_deref()].into_iter().flatten() {
                write_node(out, child, next)?;
                writeln!(out, "\tn{name} -- n{next};")?;
                stack.push((child, next));
                next += 1;
            }
        }

        writeln!(out, "}}")
    }

    /// Write the DOT graph to `path`, creating or truncating the file.
    pub fn save_dot(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_dot(&mut out)?;
        out.flush()
    }
}

fn write_node<P, W: Write>(out: &mut W, node: &Node<P>, name: usize) -> io::Result<()> {
    writeln!(
        out,
        "\tn{name} [label=\"{}\\np: {}\\nhc: {}\\nX: {}\\nY: {}\", color=black, fontcolor=white, style=filled, fillcolor={}];",
        node.kind.label(),
        node.priority,
        node.hits,
        node.x as i64,
        node.y as i64,
        node.kind.dot_color(),
    )
}
