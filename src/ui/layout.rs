use ratatui::layout::Rect;

/// Splits the frame into header, body, and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// A centered popup rectangle clamped to the containing area.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area_without_overlap() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, area.height);
        assert_eq!(body.y, header.height);
        assert_eq!(footer.y, area.height - footer.height);
    }

    #[test]
    fn tiny_areas_never_underflow() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn popup_is_clamped_to_the_frame() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 10,
        };
        let popup = centered_rect_by_size(60, 20, area);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
