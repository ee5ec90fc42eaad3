/// Committed-row state.
///
/// Starts `Unselected`; every activation moves it to `Selected(i)`, and a
/// later activation simply overwrites the index. The only way back to
/// `Unselected` is replacing the data set, since positional indices mean
/// nothing across data sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(index) => Some(*index),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        *self == Selection::Selected(index)
    }

    pub(crate) fn commit(&mut self, index: usize) {
        *self = Selection::Selected(index);
    }

    pub(crate) fn reset(&mut self) {
        *self = Selection::Unselected;
    }
}
