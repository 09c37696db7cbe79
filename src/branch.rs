use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

/// One of the two children of a [`BinaryTree`](crate::BinaryTree) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Left,
    Right,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Left => f.write_str("L"),
            Branch::Right => f.write_str("R"),
        }
    }
}

/// Sequence of branches leading from a root to one of its nodes.
/// The empty path addresses the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<Branch>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, branch: Branch) {
        self.0.push(branch);
    }

    /// Number of edges between the root and the addressed node
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.0
    }
}

impl From<Vec<Branch>> for NodePath {
    fn from(branches: Vec<Branch>) -> Self {
        Self(branches)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("root");
        }
        for branch in &self.0 {
            write!(f, "{}", branch)?;
        }
        Ok(())
    }
}

/// Decides which child to descend into when both are occupied.
pub trait BranchChooser {
    fn choose(&mut self) -> Branch;
}

/// Any closure returning a [`Branch`] is a chooser, which lets callers script
/// the descent.
impl<F> BranchChooser for F
where
    F: FnMut() -> Branch,
{
    fn choose(&mut self) -> Branch {
        self()
    }
}

/// Uniform coin flip over an injected random number generator.
#[derive(Debug)]
pub struct RandomBranch<R = ThreadRng> {
    rng: R,
}

impl RandomBranch<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomBranch<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBranch<StdRng> {
    /// Reproducible chooser, the same seed always yields the same branches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomBranch<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BranchChooser for RandomBranch<R> {
    fn choose(&mut self) -> Branch {
        if self.rng.gen_bool(0.5) {
            Branch::Left
        } else {
            Branch::Right
        }
    }
}
