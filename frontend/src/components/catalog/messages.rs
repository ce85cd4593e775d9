use common::fragment::ProductFragment;

pub enum Msg {
    /// Fragments produced by a finished load, in catalog order.
    Loaded(Vec<ProductFragment>),
}
