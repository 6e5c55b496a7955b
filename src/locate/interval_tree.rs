// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/// A static binary tree over closed 1-D intervals, built once and queried
/// many times.
///
/// Items are sorted by interval centre and split at the median, so sibling
/// subtrees cover mostly disjoint ranges and a stabbing query descends only
/// into nodes whose interval contains the query value.
#[derive(Debug, Clone)]
pub struct SortedIntervalTree<D> {
    root: Option<Box<IntervalNode<D>>>,
    len: usize,
}

#[derive(Debug, Clone)]
enum IntervalNode<D> {
    Leaf {
        min: f64,
        max: f64,
        data: D,
    },
    Node {
        min: f64,
        max: f64,
        left: Box<IntervalNode<D>>,
        right: Box<IntervalNode<D>>,
    },
}

impl<D> SortedIntervalTree<D> {
    /// Build from `(min, max, data)` triples. Intervals with `min > max`
    /// are swapped.
    pub fn build(mut items: Vec<(f64, f64, D)>) -> Self {
        for item in items.iter_mut() {
            if item.0 > item.1 {
                std::mem::swap(&mut item.0, &mut item.1);
            }
        }
        let len = items.len();
        items.sort_by(|a, b| (a.0 + a.1).total_cmp(&(b.0 + b.1)));
        let root = IntervalNode::build_binary_tree(items).map(Box::new);
        SortedIntervalTree { root, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visit every item whose interval contains `value`.
    pub fn query<F: FnMut(&D)>(&self, value: f64, mut visit: F) {
        if let Some(root) = &self.root {
            root.query(value, &mut visit);
        }
    }

    /// Collect every item whose interval contains `value`.
    pub fn query_collect(&self, value: f64) -> Vec<&D> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect(value, &mut out);
        }
        out
    }
}

impl<D> IntervalNode<D> {
    fn build_binary_tree(mut items: Vec<(f64, f64, D)>) -> Option<Self> {
        if items.len() <= 1 {
            return items
                .pop()
                .map(|(min, max, data)| IntervalNode::Leaf { min, max, data });
        }

        let mid = items.len() / 2;
        let right_items = items.split_off(mid);

        let left = Self::build_binary_tree(items)?;
        let right = Self::build_binary_tree(right_items)?;
        let (lmin, lmax) = left.range();
        let (rmin, rmax) = right.range();

        Some(IntervalNode::Node {
            min: lmin.min(rmin),
            max: lmax.max(rmax),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn range(&self) -> (f64, f64) {
        match self {
            IntervalNode::Leaf { min, max, .. } | IntervalNode::Node { min, max, .. } => (*min, *max),
        }
    }

    fn query<F: FnMut(&D)>(&self, value: f64, visit: &mut F) {
        let (min, max) = self.range();
        if value < min || value > max {
            return;
        }
        match self {
            IntervalNode::Leaf { data, .. } => visit(data),
            IntervalNode::Node { left, right, .. } => {
                left.query(value, visit);
                right.query(value, visit);
            }
        }
    }

    fn collect<'a>(&'a self, value: f64, out: &mut Vec<&'a D>) {
        let (min, max) = self.range();
        if value < min || value > max {
            return;
        }
        match self {
            IntervalNode::Leaf { data, .. } => out.push(data),
            IntervalNode::Node { left, right, .. } => {
                left.collect(value, out);
                right.collect(value, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stabbing_query_finds_overlaps() {
        let tree = SortedIntervalTree::build(vec![
            (0.0, 1.0, 'a'),
            (0.5, 2.0, 'b'),
            (3.0, 4.0, 'c'),
            (5.0, 3.5, 'd'),
        ]);
        assert_eq!(tree.len(), 4);
        let mut hits: Vec<char> = tree.query_collect(0.75).into_iter().copied().collect();
        hits.sort();
        assert_eq!(hits, vec!['a', 'b']);
        let mut hits = Vec::new();
        tree.query(3.75, |d| hits.push(*d));
        hits.sort();
        assert_eq!(hits, vec!['c', 'd']);
        assert!(tree.query_collect(2.5).is_empty());
        // closed intervals
        assert_eq!(tree.query_collect(4.0).len(), 2);
    }

    #[test]
    fn empty_tree() {
        let tree: SortedIntervalTree<u32> = SortedIntervalTree::build(Vec::new());
        assert!(tree.is_empty());
        assert!(tree.query_collect(0.0).is_empty());
    }
}
