use color_lift::{child_key, Host, Parent, RecordingRenderer, SeededColors};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_child_shows_the_lifted_color_after_each_click(
        seed in any::<u64>(),
        children in 1usize..5,
        clicks in proptest::collection::vec(0usize..8, 0..24),
    ) {
        let renders = RecordingRenderer::new();
        let parent = Parent::new(SeededColors::new(seed)).with_children(children);
        let mut host = Host::mount(parent, renders.clone());

        let expected_renders = clicks.len() + 1;
        for click in clicks {
            let key = child_key(click % children);
            prop_assert_eq!(host.click(&key), Ok(1));

            let shared = host.model().children_color.clone();
            let tree = host.tree();
            prop_assert_eq!(tree.children().len(), children);
            for child in tree.children() {
                prop_assert_eq!(child.background(), &shared);
            }
            prop_assert_eq!(tree.background(), &host.model().color);
        }

        prop_assert_eq!(renders.count(), expected_renders);
    }
}
