use battleship_solo::render::{SHIP_GLYPH, WATER_GLYPH};
use battleship_solo::{
    render_field, write_field, ColorMode, Field, Orientation, RenderOptions, Ship,
};

fn sample_field() -> Field {
    let mut field = Field::new(5).unwrap();
    field
        .place(Ship::new(Orientation::Horizontal, 2, 1, 3, 5).unwrap())
        .unwrap();
    field.shoot(2, 2).unwrap();
    field.shoot(0, 0).unwrap();
    field
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[test]
fn test_hidden_layout() {
    let text = render_field(&sample_field(), RenderOptions::hidden(ColorMode::Plain));
    let expected = "  0 1 2 3 4\n\
                    0 O ~ ~ ~ ~\n\
                    1 ~ ~ ~ ~ ~\n\
                    2 ~ ~ X ~ ~\n\
                    3 ~ ~ ~ ~ ~\n\
                    4 ~ ~ ~ ~ ~\n";
    assert_eq!(text, expected);
    assert!(!text.contains(SHIP_GLYPH));
}

#[test]
fn test_revealed_layout() {
    let text = render_field(&sample_field(), RenderOptions::revealed(ColorMode::Plain));
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows[3], "2 ~ # X # ~");
    let ship_like = text.chars().filter(|&c| c == '#' || c == 'X').count();
    assert_eq!(ship_like, 3);
}

#[test]
fn test_unshot_ship_hidden_as_water() {
    let mut field = Field::new(5).unwrap();
    field
        .place(Ship::new(Orientation::Vertical, 0, 4, 3, 5).unwrap())
        .unwrap();
    let hidden = render_field(&field, RenderOptions::default());
    assert!(!hidden.contains(SHIP_GLYPH));
    assert_eq!(hidden.chars().filter(|&c| c == WATER_GLYPH).count(), 25);

    let shown = render_field(&field, RenderOptions::revealed(ColorMode::Plain));
    assert_eq!(shown.chars().filter(|&c| c == SHIP_GLYPH).count(), 3);
}

#[test]
fn test_color_only_changes_presentation() {
    let field = sample_field();
    for reveal in [false, true] {
        let plain = render_field(&field, RenderOptions { reveal, color: ColorMode::Plain });
        let ansi = render_field(&field, RenderOptions { reveal, color: ColorMode::Ansi });
        assert_ne!(plain, ansi);
        assert!(ansi.contains("\x1b[31mX\x1b[0m"));
        assert_eq!(strip_ansi(&ansi), plain);
    }
}

#[test]
fn test_wide_indices_stay_aligned() {
    let field = Field::new(11).unwrap();
    let text = render_field(&field, RenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].ends_with(" 9 10"));
    assert!(lines[11].starts_with("10  ~"));
    let width = lines[0].len();
    assert!(lines.iter().all(|l| l.chars().count() == width));
}

#[test]
fn test_write_field_into_any_writer() {
    let mut out = String::from("Field:\n");
    write_field(&mut out, &sample_field(), RenderOptions::default()).unwrap();
    assert!(out.starts_with("Field:\n  0 1 2 3 4\n"));
}
