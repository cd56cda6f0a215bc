//! Router invariants over many navigation sequences.

use std::sync::{Arc, Mutex};

use folio::adapters::ManualDelay;
use folio::router::{
    NavigationOutcome, PageId, PageInitializer, PageRouter, RouterState, TransitionAnimation,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Default)]
struct Recorder {
    pages: Mutex<Vec<PageId>>,
}

impl PageInitializer for Recorder {
    fn initialize(&self, page: PageId) {
        self.pages.lock().unwrap().push(page);
    }
}

fn router_with(delay: &ManualDelay) -> (PageRouter, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let router =
        PageRouter::with_all_pages(PageId::Home, Arc::new(delay.clone()), recorder.clone());
    (router, recorder)
}

#[tokio::test]
async fn test_exactly_one_page_active_after_every_navigation() {
    let delay = ManualDelay::immediate();
    let (router, recorder) = router_with(&delay);
    let mut rng = StdRng::seed_from_u64(7);
    let mut expected_inits = Vec::new();

    for _ in 0..200 {
        let target = PageId::ALL[rng.random_range(0..PageId::ALL.len())];
        let before = router.current();
        let outcome = router.navigate(target, None).await;

        if before == target {
            assert_eq!(outcome, NavigationOutcome::AlreadyActive);
        } else {
            assert_eq!(outcome, NavigationOutcome::Completed);
            expected_inits.push(target);
        }
        assert_eq!(router.state(), RouterState::Idle(target));
        assert_eq!(router.active_pages(), vec![target]);

        let snapshot = router.snapshot();
        assert!(!snapshot.overlay_visible);
        assert_eq!(snapshot.nav_highlight, target);
        assert!(snapshot.sections.iter().all(|section| section.visual.is_none()));
    }

    assert_eq!(*recorder.pages.lock().unwrap(), expected_inits);
}

#[tokio::test]
async fn test_burst_of_requests_runs_only_the_first() {
    let delay = ManualDelay::gated();
    let (router, recorder) = router_with(&delay);

    let first = {
        let router = router.clone();
        tokio::spawn(async move {
            router
                .navigate(PageId::Skills, Some(TransitionAnimation::Pop))
                .await
        })
    };
    delay.wait_for_requests(1).await;

    for page in PageId::ALL {
        let outcome = router.navigate(page, None).await;
        assert_eq!(outcome, NavigationOutcome::Dropped, "{} was not dropped", page);
    }
    // never more than two sections active at once, even mid-transition
    assert!(router.active_pages().len() <= 2);

    delay.release(3);
    assert_eq!(first.await.unwrap(), NavigationOutcome::Completed);
    assert_eq!(router.active_pages(), vec![PageId::Skills]);
    assert_eq!(*recorder.pages.lock().unwrap(), vec![PageId::Skills]);
}

#[tokio::test]
async fn test_cancel_during_enter_lands_and_later_navigations_skip_waits() {
    let delay = ManualDelay::gated();
    let (router, recorder) = router_with(&delay);

    let task = {
        let router = router.clone();
        tokio::spawn(async move {
            router
                .navigate(PageId::Contact, Some(TransitionAnimation::Rise))
                .await
        })
    };
    // exit and settle run normally, then the enter stage is cut short
    delay.wait_for_requests(1).await;
    delay.release(1);
    delay.wait_for_requests(2).await;
    delay.release(1);
    delay.wait_for_requests(3).await;
    assert_eq!(router.active_pages(), vec![PageId::Contact]);
    assert!(recorder.pages.lock().unwrap().is_empty());

    router.cancel();
    assert_eq!(task.await.unwrap(), NavigationOutcome::Completed);
    assert_eq!(router.state(), RouterState::Idle(PageId::Contact));
    assert_eq!(*recorder.pages.lock().unwrap(), vec![PageId::Contact]);

    // once cancelled, every stage of a new navigation returns at once
    assert_eq!(
        router.navigate(PageId::Home, None).await,
        NavigationOutcome::Completed
    );
    assert_eq!(router.active_pages(), vec![PageId::Home]);
    assert_eq!(
        *recorder.pages.lock().unwrap(),
        vec![PageId::Contact, PageId::Home]
    );
    assert_eq!(delay.requested().len(), 6);
}

#[tokio::test]
async fn test_unregistered_page_is_refused() {
    let delay = ManualDelay::immediate();
    let recorder = Arc::new(Recorder::default());
    let router = PageRouter::new(
        PageId::Home,
        [PageId::Home, PageId::About],
        Arc::new(delay.clone()),
        recorder.clone(),
    );

    assert_eq!(
        router.navigate(PageId::Projects, None).await,
        NavigationOutcome::MissingSection
    );
    assert_eq!(
        router.navigate(PageId::About, None).await,
        NavigationOutcome::Completed
    );
    assert_eq!(router.active_pages(), vec![PageId::About]);
    assert_eq!(delay.requested().len(), 3);
}
