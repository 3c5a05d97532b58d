use nf_core::FeedService;

pub struct AppState {
    pub feeds: FeedService,
}
