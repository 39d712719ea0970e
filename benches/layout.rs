use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_panels::core::{layout, Colors, Gui, GuiConfig, InstantPacer, PanelGroup};
use tui_panels::term::FrameBuffer;
use tui_panels::types::Rect;

const PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute-irure \
dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

fn long_text() -> String {
    std::iter::repeat(PARAGRAPH).take(20).collect::<Vec<_>>().join("\n\n")
}

fn gui() -> Gui<FrameBuffer> {
    let config = GuiConfig::default();
    let (w, h) = config.screen_size();
    Gui::with_pacer(config, FrameBuffer::new(w, h), Box::new(InstantPacer::default()))
}

fn bench_wrap(c: &mut Criterion) {
    let text = long_text();
    c.bench_function("wrap_40_cols", |b| {
        b.iter(|| layout::wrap(black_box(&text), black_box(40)))
    });
}

fn bench_set_text(c: &mut Criterion) {
    let text = long_text();
    let mut g = gui();
    let mut group = PanelGroup::scrolling();
    group.add(&mut g, Rect::new(0, 0, 60, 30), "", Colors::default());

    c.bench_function("panel_set_text", |b| {
        b.iter(|| group.write_text(&mut g, black_box(&text)))
    });
}

fn bench_navigation(c: &mut Criterion) {
    let text = long_text();
    let mut g = gui();
    let mut group = PanelGroup::selectable();
    group.add(&mut g, Rect::new(0, 0, 60, 30), &text, Colors::default());

    c.bench_function("select_next_and_back", |b| {
        b.iter(|| {
            group.select_next(&mut g);
            group.select_previous(&mut g);
        })
    });
}

criterion_group!(benches, bench_wrap, bench_set_text, bench_navigation);
criterion_main!(benches);
