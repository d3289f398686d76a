use web_sys::js_sys;
use yew::prelude::*;

struct Sphere {
    size: u32,
    top: &'static str,
    left: &'static str,
    duration: u32,
}

const SPHERES: [Sphere; 6] = [
    Sphere { size: 300, top: "5%", left: "10%", duration: 28 },
    Sphere { size: 450, top: "50%", left: "20%", duration: 35 },
    Sphere { size: 250, top: "60%", left: "85%", duration: 25 },
    Sphere { size: 350, top: "5%", left: "70%", duration: 32 },
    Sphere { size: 200, top: "80%", left: "5%", duration: 22 },
    Sphere { size: 400, top: "20%", left: "45%", duration: 30 },
];

/// Maps a uniform sample in `[0, 1)` to a drift offset in `[-6, 6)`.
fn drift(sample: f64) -> f64 {
    sample * 12.0 - 6.0
}

fn sphere_style(index: usize, sphere: &Sphere, offsets: [f64; 4]) -> String {
    format!(
        "width: {size}px; height: {size}px; top: {top}; left: {left}; \
         animation-duration: {duration}s; animation-delay: {delay}s; \
         --x-1: {:.2}vw; --y-1: {:.2}vh; --x-2: {:.2}vw; --y-2: {:.2}vh;",
        offsets[0],
        offsets[1],
        offsets[2],
        offsets[3],
        size = sphere.size,
        top = sphere.top,
        left = sphere.left,
        duration = sphere.duration,
        delay = index as i64 * -5,
    )
}

/// Blurred spheres drifting behind the glass card. Offsets are drawn once
/// per page load.
#[function_component(Background)]
pub fn background() -> Html {
    let styles = use_state(|| {
        SPHERES
            .iter()
            .enumerate()
            .map(|(i, sphere)| {
                let offsets = [(); 4].map(|_| drift(js_sys::Math::random()));
                sphere_style(i, sphere, offsets)
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="background">
            { for styles.iter().map(|style| html! { <div class="sphere" style={style.clone()} /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_stays_within_six_units() {
        assert_eq!(drift(0.0), -6.0);
        assert_eq!(drift(0.5), 0.0);
        assert!(drift(0.999_999) < 6.0);
    }

    #[test]
    fn later_spheres_start_earlier_in_their_cycle() {
        let style = sphere_style(2, &SPHERES[2], [1.0, -1.0, 0.5, 0.0]);
        assert!(style.contains("animation-delay: -10s;"));
        assert!(style.contains("--x-1: 1.00vw;"));
        assert!(style.contains("width: 250px;"));
    }
}
