//! Builders for constructing binary trees.
//!
//! The `TreeBuilder` and `NodeBuilder` types build a [`BinaryTree`] in a composable way
//! from nested closures.
//!

use std::{convert::Infallible, marker::PhantomData};

use tracing::{debug, debug_span, warn};

use crate::{branch::Branch, BinaryTree, Content};

/// A builder for attaching children to one node.
///
/// It is handed to the closures passed to [`TreeBuilder::root`] and to its own
/// [`left`](NodeBuilder::left) and [`right`](NodeBuilder::right) methods.
pub struct NodeBuilder<'a, E> {
    node: &'a mut BinaryTree,
    depth: usize,
    _phantom: PhantomData<E>,
}

impl<'a, E> NodeBuilder<'a, E> {
    fn new(node: &'a mut BinaryTree, depth: usize) -> Self {
        Self {
            node,
            depth,
            _phantom: PhantomData,
        }
    }

    /// Adds a left child holding `content`.
    ///
    /// # Arguments
    ///
    /// * `content`: The content of the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn left<F>(&mut self, content: impl Into<Content>, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        self.child(Branch::Left, content, f)
    }

    /// Adds a right child holding `content`. See [`NodeBuilder::left`].
    pub fn right<F>(&mut self, content: impl Into<Content>, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        self.child(Branch::Right, content, f)
    }

    /// Adds a child on `branch`, replacing any child already there.
    pub fn child<F>(
        &mut self,
        branch: Branch,
        content: impl Into<Content>,
        f: F,
    ) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let mut child = BinaryTree::with_content(content);

        // Call the supplied closure with a NodeBuilder to add this child's children
        f(&mut NodeBuilder::new(&mut child, self.depth + 1))?;

        debug!(
            "Attached {} child {} at depth {}",
            branch,
            child.get_item(),
            self.depth + 1
        );

        if self.node.set_child(branch, child).is_some() {
            warn!("Replaced existing {} child", branch);
        }
        Ok(())
    }

    /// Depth of the node being built, the root is at 0
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn node(&self) -> &BinaryTree {
        self.node
    }
}

/// A builder for constructing trees.
///
/// The `root` method sets the root content and calls the provided closure with a
/// [`NodeBuilder`] that can be used to recursively build children. The closures
/// return `Result<(), E>` where `E` is your error type, so errors inside the
/// closures propagate out of the builder.
///
/// # Examples
///
/// ```
/// use adtkit::TreeBuilder;
///
/// let tree = TreeBuilder::<String>::new()
///     .root("B", |b| {
///         b.left("A", |_| Ok(()))?;
///         b.right("C", |_| Ok(()))
///     })
///     .unwrap()
///     .done();
///
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<E> {
    root: Option<BinaryTree>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<E> TreeBuilder<E> {
    /// Creates a new `TreeBuilder` instance.
    pub fn new() -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Sets the root content and returns the updated builder.
    ///
    /// # Arguments
    ///
    /// * `content`: The content of the root node.
    /// * `f`: A closure that takes the root builder and adds its children.
    pub fn root<F>(mut self, content: impl Into<Content>, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let span = self.debug_span.clone();
        span.in_scope(|| -> Result<(), E> {
            let mut root = BinaryTree::with_content(content);
            f(&mut NodeBuilder::new(&mut root, 0))?;

            if self.root.replace(root).is_some() {
                warn!("Replaced existing root");
            } else {
                debug!("Added root");
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// Returns the constructed tree, an empty tree if no root was added.
    pub fn done(self) -> BinaryTree {
        self.debug_span.in_scope(|| {
            debug!("Finished building tree");
            self.root.unwrap_or_default()
        })
    }
}

impl<E> Default for TreeBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn infallible(built: Result<TreeBuilder<Infallible>, Infallible>) -> BinaryTree {
    built.map(TreeBuilder::done).unwrap_or_else(|never| match never {})
}

impl BinaryTree {
    /// Letters tree rooted at `W`, used for demonstrations.
    ///
    /// ```text
    ///           W
    ///       G       S
    ///     A   D   T   M
    ///        X Y N   L
    ///           Z
    /// ```
    pub fn example() -> Self {
        infallible(TreeBuilder::new().root("W", |w| {
            w.left("G", |g| {
                g.left("A", |_| Ok(()))?;
                g.right("D", |d| {
                    d.left("X", |_| Ok(()))?;
                    d.right("Y", |y| y.right("Z", |_| Ok(())))
                })
            })?;
            w.right("S", |s| {
                s.left("T", |t| t.left("N", |_| Ok(())))?;
                s.right("M", |m| m.left("L", |_| Ok(())))
            })
        }))
    }

    /// Integer tree rooted at 7 that satisfies the search tree ordering.
    pub fn example_search_tree() -> Self {
        infallible(TreeBuilder::new().root(7, |root| {
            root.left(1, |one| {
                one.left(0, |_| Ok(()))?;
                one.right(3, |three| {
                    three.left(2, |_| Ok(()))?;
                    three.right(5, |_| Ok(()))
                })
            })?;
            root.right(12, |twelve| {
                twelve.left(9, |nine| {
                    nine.left(8, |_| Ok(()))?;
                    nine.right(10, |_| Ok(()))
                })?;
                twelve.right(13, |thirteen| thirteen.right(15, |_| Ok(())))
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[derive(Debug, PartialEq)]
    #[allow(unused)]
    enum MyError {
        Fail(String),
    }

    #[traced_test]
    #[test]
    fn test_builder() {
        let tree = TreeBuilder::<MyError>::new()
            .root("Foo", |foo| {
                foo.left("Bar", |bar| bar.right("Baz", |_| Ok(())))?;
                foo.right(42, |_| Ok(()))?;
                Ok(())
            })
            .unwrap()
            .done();

        println!("{}", tree);

        assert_eq!(tree.get_item(), &Content::from("Foo"));
        assert_eq!(
            tree.get_left()
                .and_then(BinaryTree::get_right)
                .map(BinaryTree::get_item),
            Some(&Content::from("Baz"))
        );
        assert_eq!(
            tree.get_right().map(BinaryTree::get_item),
            Some(&Content::Integer(42))
        );
        assert!(logs_contain("Finished building tree"));
    }

    #[test]
    fn test_depths() {
        TreeBuilder::<MyError>::new()
            .root("Foo", |foo| {
                assert_eq!(foo.depth(), 0);
                foo.left("Bar", |bar| {
                    assert_eq!(bar.depth(), 1);
                    bar.left("Baz", |baz| {
                        assert_eq!(baz.depth(), 2);
                        Ok(())
                    })
                })
            })
            .unwrap();
    }

    #[test]
    fn test_error_propagates() {
        let result = TreeBuilder::<MyError>::new().root("Foo", |foo| {
            foo.left("Bar", |_| Err(MyError::Fail("bad child".into())))
        });

        assert_eq!(result.err(), Some(MyError::Fail("bad child".into())));
    }

    #[test]
    fn test_empty_builder() {
        assert_eq!(TreeBuilder::<MyError>::default().done(), BinaryTree::new());
    }

    #[test]
    fn test_examples() {
        let tree = BinaryTree::example();
        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.node_count(), 12);

        let search = BinaryTree::example_search_tree();
        assert_eq!(search.depth(), 4);
        assert_eq!(search.node_count(), 12);

        // In-order traversal of a search tree is sorted
        fn in_order(tree: &BinaryTree, out: &mut Vec<i64>) {
            if let Some(left) = tree.get_left() {
                in_order(left, out);
            }
            out.extend(tree.get_item().as_integer());
            if let Some(right) = tree.get_right() {
                in_order(right, out);
            }
        }

        let mut values = Vec::new();
        in_order(&search, &mut values);
        assert_eq!(values, vec![0, 1, 2, 3, 5, 7, 8, 9, 10, 12, 13, 15]);
    }
}
