use crate::particles::ParticleField;
use crate::proximity::{collect_links, Link};
use crate::surface::{FieldStyle, Rgba, Surface};

/// Clear the surface and paint every particle with its own alpha.
pub fn draw_particles<S: Surface + ?Sized>(surface: &mut S, field: &ParticleField, style: &FieldStyle) {
    surface.clear(field.bounds());
    for p in field.particles() {
        surface.fill_circle(p.position, p.size(), Rgba::new(style.rgb, p.alpha()));
    }
}

/// Proximity graph pass; `links` is scratch space reused between frames.
pub fn draw_links<S: Surface + ?Sized>(
    surface: &mut S,
    field: &ParticleField,
    stride: usize,
    max_distance: f32,
    style: &FieldStyle,
    links: &mut Vec<Link>,
) {
    collect_links(field.particles(), stride, max_distance, style.link_base_alpha, links);
    let particles = field.particles();
    for link in links.iter() {
        surface.stroke_line(
            particles[link.from].position,
            particles[link.to].position,
            style.link_width,
            Rgba::new(style.rgb, link.alpha),
        );
    }
}
