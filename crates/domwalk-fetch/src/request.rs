use url::Url;

/// Lifecycle of a single GET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RequestState {
    Idle,
    Sent,
    InProgress,
    Settled,
}

/// Tracks one request through its lifecycle.
///
/// States only move forward. Signals that would repeat or rewind the
/// current state are dropped, so nothing follows `Settled`.
#[derive(Debug)]
pub struct Request {
    url: Url,
    state: RequestState,
}

impl Request {
    pub fn new(url: Url) -> Self {
        Request {
            url,
            state: RequestState::Idle,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state == RequestState::Settled
    }

    /// Moves to `next`, returning whether the transition happened.
    pub fn advance(&mut self, next: RequestState) -> bool {
        if next <= self.state {
            tracing::trace!(
                "Ignoring {:?} for {} in state {:?}",
                next,
                self.url,
                self.state
            );
            return false;
        }

        tracing::trace!("{}: {:?} -> {:?}", self.url, self.state, next);
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request() -> Request {
        Request::new(Url::parse("http://example.com/").unwrap())
    }

    #[test]
    fn test_new_request_is_idle() {
        let request = request();
        assert_eq!(request.state(), RequestState::Idle);
        assert!(!request.is_settled());
        assert_eq!(request.url().as_str(), "http://example.com/");
    }

    #[test]
    fn test_full_lifecycle() {
        let mut request = request();

        assert!(request.advance(RequestState::Sent));
        assert!(request.advance(RequestState::InProgress));
        assert!(request.advance(RequestState::Settled));
        assert!(request.is_settled());
    }

    #[rstest]
    #[case(RequestState::Idle)]
    #[case(RequestState::Sent)]
    #[case(RequestState::InProgress)]
    #[case(RequestState::Settled)]
    fn test_nothing_follows_settled(#[case] signal: RequestState) {
        let mut request = request();
        request.advance(RequestState::Settled);

        assert!(!request.advance(signal));
        assert_eq!(request.state(), RequestState::Settled);
    }

    #[test]
    fn test_repeated_progress_signals_are_ignored() {
        let mut request = request();
        request.advance(RequestState::Sent);
        request.advance(RequestState::InProgress);

        assert!(!request.advance(RequestState::InProgress));
        assert!(!request.advance(RequestState::Sent));
        assert_eq!(request.state(), RequestState::InProgress);
    }

    #[test]
    fn test_settle_without_progress() {
        let mut request = request();
        request.advance(RequestState::Sent);

        assert!(request.advance(RequestState::Settled));
    }
}
