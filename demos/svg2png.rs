use std::path::Path;

use logo_convert::{Fit, ImageConverter, ResvgConverter, LOGO_SIZE};

fn main() {
    env_logger::init();
    let mut args = std::env::args();
    args.next().unwrap();

    let input = args.next().expect("input");
    let output = args.next().expect("output");
    let size = args
        .next()
        .map(|s| s.parse().expect("size"))
        .unwrap_or(LOGO_SIZE);

    ResvgConverter::new(Fit::Contain)
        .with_system_fonts(true)
        .convert_image(Path::new(&input), Path::new(&output), size, size)
        .unwrap();
}
