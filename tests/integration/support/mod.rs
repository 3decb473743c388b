use color_lift::{Color, Element, Host, MockColorGenerator, Parent, RecordingRenderer};
use mockall::Sequence;

pub(crate) type TestHost = Host<Parent, RecordingRenderer>;

pub(crate) struct IntegrationTest {
    pub(crate) host: TestHost,
    pub(crate) renders: RecordingRenderer,
}

pub(crate) struct IntegrationTestBuilder {
    generated: Vec<&'static str>,
    children: Option<usize>,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    IntegrationTestBuilder {
        generated: Vec::new(),
        children: None,
    }
}

impl IntegrationTestBuilder {
    /// Colors the shared generator hands out, in order. The first one goes
    /// to the parent at mount; each click then consumes two (the child's
    /// pick, then the parent's own new color).
    pub(crate) fn given_generated_colors(mut self, colors: &[&'static str]) -> Self {
        self.generated.extend_from_slice(colors);
        self
    }

    pub(crate) fn given_children(mut self, count: usize) -> Self {
        self.children = Some(count);
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let mut generator = MockColorGenerator::new();
        let mut sequence = Sequence::new();
        for color in self.generated {
            generator
                .expect_next_color()
                .times(1)
                .in_sequence(&mut sequence)
                .return_const(Color::new(color));
        }

        let mut parent = Parent::new(generator);
        if let Some(count) = self.children {
            parent = parent.with_children(count);
        }

        let renders = RecordingRenderer::new();
        let host = Host::mount(parent, renders.clone());

        IntegrationTest { host, renders }
    }
}

/// Backgrounds of the parent's direct children, in render order.
pub(crate) fn child_backgrounds(tree: &Element) -> Vec<String> {
    tree.children()
        .iter()
        .map(|child| child.background().to_string())
        .collect()
}
