//! Product card markup.

use showroom_core::{CardActionKind, Product};

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The data attribute a card button carries, e.g. `data-add="City Scooter Pro"`.
pub fn action_attribute(kind: CardActionKind, name: &str) -> String {
    format!("{}=\"{}\"", kind.data_attribute(), escape_html(name))
}

/// Tag badge.
pub fn badge_html(tag: &str) -> String {
    format!(
        r#"<span class="badge" aria-label="Tag">{}</span>"#,
        escape_html(tag)
    )
}

/// Formatted price: `$` followed by the whole-dollar amount.
pub fn price_label(price: u32) -> String {
    format!("${price}")
}

/// Markup for one product card.
pub fn card_html(product: &Product) -> String {
    let name = escape_html(&product.name);
    format!(
        r#"<article class="card">
  <div class="card__img">
    <img src="{image}" alt="{name}" loading="lazy" />
  </div>
  <div class="card__body">
    <h3 class="card__title">{name}</h3>
    <div class="card__meta">
      <span class="muted">{badge}</span>
      <span class="price">{price}</span>
    </div>
    <div class="card__actions">
      <button class="btn" type="button" {view}>View</button>
      <button class="btn btn--primary" type="button" {add}>Add to cart</button>
    </div>
  </div>
</article>
"#,
        image = escape_html(&product.image),
        badge = badge_html(&product.tag),
        price = price_label(product.price),
        view = action_attribute(CardActionKind::View, &product.name),
        add = action_attribute(CardActionKind::Add, &product.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::{Catalog, Category};

    #[test]
    fn test_badge() {
        insta::assert_snapshot!(badge_html("Featured"), @r#"<span class="badge" aria-label="Tag">Featured</span>"#);
    }

    #[test]
    fn test_price_label() {
        insta::assert_snapshot!(price_label(1299), @"$1299");
    }

    #[test]
    fn test_card_contents() {
        let catalog = Catalog::sample();
        let html = card_html(&catalog.products()[1]);

        assert!(html.contains(r#"<img src="images/2.jpg" alt="Foldable E-Bike 500W" loading="lazy" />"#));
        assert!(html.contains(r#"<h3 class="card__title">Foldable E-Bike 500W</h3>"#));
        assert!(html.contains(&badge_html("New")));
        assert!(html.contains(r#"<span class="price">$899</span>"#));
        assert!(html.contains(r#"data-view="Foldable E-Bike 500W">View</button>"#));
        assert!(html.contains(r#"data-add="Foldable E-Bike 500W">Add to cart</button>"#));
    }

    #[test]
    fn test_card_escapes_name() {
        let product = Product::new(1, r#"Bolt "X" <Pro>"#, Category::Gadgets, 10, "A&B");
        let html = card_html(&product);

        assert!(html.contains("Bolt &quot;X&quot; &lt;Pro&gt;"));
        assert!(html.contains("A&amp;B"));
        assert!(!html.contains("<Pro>"));
        assert!(html.contains(&action_attribute(CardActionKind::Add, &product.name)));
    }
}
