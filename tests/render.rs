use normalray::output::{encode_color, write_ppm};
use normalray::vec3::unit_vector;
use normalray::{Camera, Color, HitRecord, Hittable, Interval, SceneDescription, Vec3};

fn default_camera(samples_per_pixel: u32) -> Camera {
    let mut camera = SceneDescription::default_scene().build_camera();
    camera.samples_per_pixel = samples_per_pixel;
    camera
}

fn render_ppm(camera: &mut Camera) -> String {
    let world = SceneDescription::default_scene().build_world();
    let mut out = Vec::new();
    camera.render_ppm(&world, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn pixel(text: &str, width: usize, i: usize, j: usize) -> [u8; 3] {
    let line = text.lines().nth(3 + j * width + i).unwrap();
    let channels: Vec<u8> = line.split(' ').map(|c| c.parse().unwrap()).collect();
    [channels[0], channels[1], channels[2]]
}

#[test]
fn default_scene_has_expected_layout() {
    let text = render_ppm(&mut default_camera(1));
    let lines: Vec<&str> = text.lines().collect();

    // 400 / (16 / 9) = 225
    assert_eq!(&lines[..3], &["P3", "400 225", "255"]);
    assert_eq!(lines.len(), 3 + 400 * 225);
    for line in &lines[3..] {
        let channels: Vec<&str> = line.split(' ').collect();
        assert_eq!(channels.len(), 3);
        for channel in channels {
            assert!(channel.parse::<u8>().is_ok(), "bad channel {:?}", channel);
        }
    }
}

#[test]
fn top_left_pixel_is_background() {
    let text = render_ppm(&mut default_camera(1));

    let viewport_height = 2.0;
    let viewport_width = viewport_height * (400.0 / 225.0);
    let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
    let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);
    let pixel_delta_u = viewport_u / 400.0;
    let pixel_delta_v = viewport_v / 225.0;
    let viewport_upper_left =
        Vec3::ZERO - Vec3::new(0.0, 0.0, 1.0) - viewport_u / 2.0 - viewport_v / 2.0;
    let direction = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

    let a = 0.5 * (unit_vector(direction).y + 1.0);
    let background = (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0);

    assert_eq!(pixel(&text, 400, 0, 0), encode_color(background));
}

#[test]
fn top_row_is_sky_and_center_is_sphere() {
    let text = render_ppm(&mut default_camera(1));

    for i in 0..400 {
        let [r, g, b] = pixel(&text, 400, i, 0);
        assert_eq!(b, 255);
        assert!(r <= g && r >= 127, "row 0 pixel {} = {:?}", i, [r, g, b]);
    }

    // Looking straight ahead hits the small sphere face on: normal ~ +Z
    let [r, g, b] = pixel(&text, 400, 200, 112);
    assert!((120..=136).contains(&r), "r = {}", r);
    assert!((120..=136).contains(&g), "g = {}", g);
    assert_eq!(b, 255);

    // Bottom center hits the ground: normal ~ +Y
    let [r, g, b] = pixel(&text, 400, 200, 224);
    assert!((120..=136).contains(&r), "r = {}", r);
    assert_eq!(g, 255);
    assert!((120..=136).contains(&b), "b = {}", b);
}

#[test]
fn sky_column_brightens_toward_the_horizon() {
    let world = SceneDescription::default_scene().build_world();
    let mut camera = default_camera(1);
    let text = render_ppm(&mut camera);
    let mut rng = normalray::random::scanline_rng(0, 0);

    // Walk down the left edge until the first ray that hits geometry
    let sky_rows: Vec<[u8; 3]> = (0..camera.image_height())
        .take_while(|&j| {
            let r = camera.get_ray(0, j, &mut rng);
            let mut rec = HitRecord::default();
            !world.hit(&r, Interval::new(0.0, f64::INFINITY), &mut rec)
        })
        .map(|j| pixel(&text, 400, 0, j as usize))
        .collect();

    // The horizon is at row 112, and nothing is hit above it
    assert!(sky_rows.len() > 112, "only {} sky rows", sky_rows.len());
    for pair in sky_rows.windows(2) {
        let ([r0, g0, b0], [r1, g1, b1]) = (pair[0], pair[1]);
        assert_eq!((b0, b1), (255, 255));
        assert!(r1 >= r0 && g1 >= g0, "{:?} then {:?}", pair[0], pair[1]);
    }
    let [r_top, g_top, _] = sky_rows[0];
    let [r_low, g_low, _] = sky_rows[sky_rows.len() - 1];
    assert!(r_low > r_top && g_low > g_top);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let mut camera = default_camera(1);
    assert_eq!(render_ppm(&mut camera), render_ppm(&mut camera));

    let mut camera = default_camera(4);
    camera.image_width = 160;
    camera.seed = Some(99);
    assert_eq!(render_ppm(&mut camera), render_ppm(&mut camera));
}

#[test]
fn sampled_render_matches_linear_buffer() {
    let world = SceneDescription::default_scene().build_world();
    let mut camera = default_camera(4);
    camera.image_width = 64;
    camera.seed = Some(3);

    let image = camera.render(&world).unwrap();
    let mut expected = Vec::new();
    write_ppm(&mut expected, &image).unwrap();

    let mut out = Vec::new();
    camera.render_ppm(&world, &mut out).unwrap();
    assert_eq!(out, expected);
    assert_eq!(image.dimensions(), (64, 36));
}
