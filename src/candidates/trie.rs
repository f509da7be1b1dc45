//! Prefix tree over the candidate words
//!
//! Nodes live in a flat arena and refer to their children by index. A trie is
//! never mutated after construction: filtering walks it depth-first and
//! builds a fresh arena holding only the surviving words, so earlier tries
//! (the full dictionary in particular) stay valid snapshots.

use crate::core::{Constraints, WORD_LEN, Word};

type NodeId = u32;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Children in first-insertion order
    children: Vec<(u8, NodeId)>,
    /// Index into `CandidateTrie::words` when a word ends here
    terminal: Option<u32>,
}

/// Immutable prefix tree of candidate words
#[derive(Debug, Clone)]
pub struct CandidateTrie {
    nodes: Vec<Node>,
    root: NodeId,
    words: Vec<Word>,
}

/// Per-position letter table precomputed from the constraints
struct FilterPlan<'c> {
    allowed: [[bool; 26]; WORD_LEN],
    excluded: Option<&'c Word>,
}

impl<'c> FilterPlan<'c> {
    fn new(constraints: &'c Constraints) -> Self {
        let mut allowed = [[false; 26]; WORD_LEN];
        for (position, row) in allowed.iter_mut().enumerate() {
            for (slot, letter) in row.iter_mut().zip(b'a'..=b'z') {
                *slot = constraints.allows_at(position, letter);
            }
        }

        Self {
            allowed,
            excluded: constraints.excluded.as_ref(),
        }
    }

    fn allows(&self, position: usize, letter: u8) -> bool {
        self.allowed[position][usize::from(letter - b'a')]
    }
}

impl CandidateTrie {
    /// Build a trie holding every word once
    ///
    /// Duplicates are ignored; `words()` keeps first-insertion order.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::candidates::CandidateTrie;
    /// use wordle_trie::core::Word;
    ///
    /// let words: Vec<Word> = ["angle", "ankle", "angle"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let trie = CandidateTrie::build(&words);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn build<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut trie = Self::empty();
        trie.nodes.push(Node::default());

        for word in words {
            trie.insert(word);
        }

        trie
    }

    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: 0,
            words: Vec::new(),
        }
    }

    fn insert(&mut self, word: &Word) {
        let mut current = self.root;

        for &letter in word.chars() {
            let existing = self.nodes[current as usize]
                .children
                .iter()
                .find(|&&(l, _)| l == letter)
                .map(|&(_, child)| child);

            current = existing.unwrap_or_else(|| {
                let child = self.nodes.len() as NodeId;
                self.nodes.push(Node::default());
                self.nodes[current as usize].children.push((letter, child));
                child
            });
        }

        let node = &mut self.nodes[current as usize];
        if node.terminal.is_none() {
            node.terminal = Some(self.words.len() as u32);
            self.words.push(word.clone());
        }
    }

    /// New trie with exactly the words the constraints admit
    ///
    /// Subtrees are skipped as soon as a prefix puts a letter where the
    /// constraints forbid it, or when the positions left cannot hold the
    /// letters still owed to present marks. `self` is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::candidates::CandidateTrie;
    /// use wordle_trie::core::{Constraints, Word};
    ///
    /// let words: Vec<Word> = ["apple", "angle", "ankle"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let trie = CandidateTrie::build(&words);
    ///
    /// let kept = trie.filter(&Constraints::new().with_exact(2, b'k'));
    /// assert_eq!(kept.words(), &[Word::new("ankle").unwrap()]);
    /// assert_eq!(trie.len(), 3);
    /// ```
    #[must_use]
    pub fn filter(&self, constraints: &Constraints) -> Self {
        let plan = FilterPlan::new(constraints);

        let mut needs = [0u8; 26];
        for (&letter, &count) in &constraints.min_counts {
            if letter.is_ascii_lowercase() {
                needs[usize::from(letter - b'a')] = count.min(usize::from(u8::MAX)) as u8;
            }
        }

        let mut filtered = Self::empty();
        let root = self.prune(self.root, 0, needs, &plan, &mut filtered);
        filtered.root = root.unwrap_or_else(|| {
            filtered.nodes.push(Node::default());
            (filtered.nodes.len() - 1) as NodeId
        });

        filtered
    }

    /// Copy the surviving part of the subtree at `node` into `out`
    ///
    /// Children are written before their parent, so the returned id is only
    /// known once the whole subtree has been visited.
    fn prune(
        &self,
        node: NodeId,
        depth: usize,
        needs: [u8; 26],
        plan: &FilterPlan<'_>,
        out: &mut Self,
    ) -> Option<NodeId> {
        let source = &self.nodes[node as usize];

        if depth == WORD_LEN {
            let word = &self.words[source.terminal? as usize];
            if plan.excluded == Some(word) || needs.iter().any(|&n| n > 0) {
                return None;
            }

            out.nodes.push(Node {
                children: Vec::new(),
                terminal: Some(out.words.len() as u32),
            });
            out.words.push(word.clone());
            return Some((out.nodes.len() - 1) as NodeId);
        }

        let owed: usize = needs.iter().map(|&n| usize::from(n)).sum();
        if owed > WORD_LEN - depth {
            return None;
        }

        let mut children = Vec::new();
        for &(letter, child) in &source.children {
            if !plan.allows(depth, letter) {
                continue;
            }

            let mut child_needs = needs;
            let slot = &mut child_needs[usize::from(letter - b'a')];
            *slot = slot.saturating_sub(1);

            if let Some(kept) = self.prune(child, depth + 1, child_needs, plan, out) {
                children.push((letter, kept));
            }
        }

        if children.is_empty() {
            return None;
        }

        out.nodes.push(Node {
            children,
            terminal: None,
        });
        Some((out.nodes.len() - 1) as NodeId)
    }

    /// Words in the trie, in deterministic order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no word survives
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of nodes in the arena, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `word` is stored in the trie
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let mut current = self.root;

        for &letter in word.chars() {
            let next = self.nodes[current as usize]
                .children
                .iter()
                .find(|&&(l, _)| l == letter);
            match next {
                Some(&(_, child)) => current = child,
                None => return false,
            }
        }

        self.nodes[current as usize].terminal.is_some()
    }

    /// Rebuild every word by walking the node arena from the root
    #[must_use]
    pub fn traverse(&self) -> Vec<Word> {
        let mut found = Vec::with_capacity(self.words.len());
        let mut prefix = [0u8; WORD_LEN];
        self.collect(self.root, 0, &mut prefix, &mut found);
        found
    }

    fn collect(&self, node: NodeId, depth: usize, prefix: &mut [u8; WORD_LEN], found: &mut Vec<Word>) {
        let current = &self.nodes[node as usize];

        if depth == WORD_LEN {
            if current.terminal.is_some()
                && let Ok(word) = Word::from_letters(*prefix)
            {
                found.push(word);
            }
            return;
        }

        for &(letter, child) in &current.children {
            prefix[depth] = letter;
            self.collect(child, depth + 1, prefix, found);
        }
    }
}
