/// Implemented by records stored in a [`Collection`].
pub trait Identified {
    type Id: Copy + Eq + From<u64>;

    fn id(&self) -> Self::Id;
}

/// One persisted collection document: the items in stored order plus the
/// high-water mark used to assign the next id. `last_id` never decreases, so
/// ids are not reused after deletions or restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    last_id: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Identified> Collection<T> {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(items: Vec<T>, last_id: u64) -> Self {
        Self { items, last_id }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Bumps the counter and appends the record built for the new id.
    pub(crate) fn push_next(&mut self, build: impl FnOnce(T::Id) -> T) -> &T {
        self.last_id += 1;
        let item = build(T::Id::from(self.last_id));
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub(crate) fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
