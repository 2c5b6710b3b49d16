/// Navigation sink back into the owning viewer.
///
/// Invoked exactly once per selected search result.
pub trait PageNavigator: Send + Sync {
    fn go_to_page(&self, index: usize);
}
