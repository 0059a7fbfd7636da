use sniff::{classify, Detector, Format, Matcher, DETECTORS};

fn padded(prefix: &[u8]) -> Vec<u8> {
    let mut header = prefix.to_vec();
    header.resize(32, 0);
    header
}

#[test]
fn minimal_headers() {
    let headers: [(&[u8], Format); 13] = [
        (b"\xff\xd8\xff\xe0\0\x10JFIF\0", Format::Jpeg),
        (b"\x89PNG\r\n\x1a\n", Format::Png),
        (b"GIF87a", Format::Gif),
        (b"MM\0*", Format::Tiff),
        (b"\x01\xda\x01\x01", Format::Rgb),
        (b"P4\n", Format::Pbm),
        (b"P5 ", Format::Pgm),
        (b"P6\r", Format::Ppm),
        (b"\x59\xa6\x6a\x95", Format::Rast),
        (b"#define test_width 16\n", Format::Xbm),
        (b"BM", Format::Bmp),
        (b"RIFF\x24\0\0\0WEBPVP8 ", Format::Webp),
        (b"\x76\x2f\x31\x01", Format::Exr),
    ];

    for (header, format) in headers {
        assert_eq!(classify(header), Some(format), "{header:x?}");
        assert_eq!(classify(&padded(header)), Some(format), "{header:x?}");
    }
}

#[test]
fn variants() {
    assert_eq!(classify(b"\xff\xd8\xff\xe1\0\x10Exif\0\0"), Some(Format::Jpeg));
    assert_eq!(classify(b"GIF89a"), Some(Format::Gif));
    assert_eq!(classify(b"II*\0"), Some(Format::Tiff));
    assert_eq!(classify(b"P1\t"), Some(Format::Pbm));
    assert_eq!(classify(b"P2\n"), Some(Format::Pgm));
    assert_eq!(classify(b"P3 "), Some(Format::Ppm));
}

#[test]
fn scenarios() {
    assert_eq!(classify(&padded(b"\x89PNG\r\n\x1a\n")), Some(Format::Png));
    assert_eq!(classify(&padded(b"GIF89a")), Some(Format::Gif));
    assert_eq!(
        classify(&padded(b"RIFF\xde\xad\xbe\xefWEBP")),
        Some(Format::Webp)
    );
    assert_eq!(classify(&padded(b"RIFF\0\0\0\0XXXX")), None);
    assert_eq!(classify(b"BM"), Some(Format::Bmp));
    assert_eq!(classify(b"P"), None);
}

#[test]
fn short_headers() {
    assert_eq!(classify(b""), None);
    assert_eq!(classify(b"\x89"), None);
    assert_eq!(classify(b"\x89P"), None);
    assert_eq!(classify(b"GIF89"), None);
    assert_eq!(classify(b"P6"), None);
    assert_eq!(classify(b"RIFF\0\0\0\0WEB"), None);
    assert_eq!(classify(b"#define"), None);
    assert_eq!(classify(b"\xff\xd8\xff\xe0\0\x10JFI"), None);

    // Every prefix of a signature that is shorter than the signature
    for signature in [&b"\x89PNG\r\n\x1a\n"[..], b"\x59\xa6\x6a\x95", b"\x76\x2f\x31\x01"] {
        for len in 0..signature.len() {
            assert_eq!(classify(&signature[..len]), None, "{len}");
        }
    }
}

#[test]
fn netpbm_needs_whitespace() {
    assert_eq!(classify(b"P6x"), None);
    assert_eq!(classify(b"P7 "), None);
    assert_eq!(classify(b"p6 "), None);
}

#[test]
fn idempotent() {
    let header = padded(b"II*\0");
    assert_eq!(classify(&header), classify(&header));
    assert_eq!(classify(b"nothing"), classify(b"nothing"));
}

#[test]
fn first_match_wins() {
    // "BM" also satisfies the second detector, which must not be evaluated
    let detectors = [
        Detector::new(Format::Bmp, |h| h.starts_with(b"BM")),
        Detector::new(Format::Exr, |_| panic!("Detector evaluated after match")),
    ];
    let matcher = Matcher::new(&detectors);
    assert_eq!(matcher.classify(b"BM\0\0"), Some(Format::Bmp));

    // Order decides between overlapping detectors
    let detectors = [
        Detector::new(Format::Tiff, |h| h.starts_with(b"MM")),
        Detector::new(Format::Bmp, |h| h.starts_with(b"M")),
    ];
    assert_eq!(Matcher::new(&detectors).classify(b"MM"), Some(Format::Tiff));
    let reversed = [detectors[1], detectors[0]];
    assert_eq!(Matcher::new(&reversed).classify(b"MM"), Some(Format::Bmp));
}

#[test]
fn jpeg_is_checked_before_bmp() {
    // Matches jpeg at offset 6 and bmp at offset 0
    let header = b"BM\0\0\0\0JFIF";
    assert_eq!(classify(header), Some(Format::Jpeg));

    let candidates: Vec<_> = Matcher::default().candidates(header).collect();
    assert_eq!(candidates, [Format::Jpeg, Format::Bmp]);
}

#[test]
fn registration_order() {
    let order: Vec<_> = DETECTORS.iter().map(|x| x.format()).collect();
    assert_eq!(order, Format::ALL);
}

#[test]
fn empty_matcher() {
    assert_eq!(Matcher::new(&[]).classify(b"BM"), None);
    assert_eq!(Matcher::new(&[]).candidates(b"BM").count(), 0);
}

#[test]
fn tags() {
    let tags: Vec<_> = Format::ALL.iter().map(|x| x.to_string()).collect();
    assert_eq!(
        tags,
        [
            "jpeg", "png", "gif", "tiff", "rgb", "pbm", "pgm", "ppm", "rast", "xbm", "bmp", "webp",
            "exr"
        ]
    );

    for format in Format::ALL {
        assert_eq!(format.as_str().parse(), Ok(format));
    }
    assert!("".parse::<Format>().is_err());
    assert_eq!(
        "jpg".parse::<Format>().unwrap_err().to_string(),
        "Unknown image format tag 'jpg'"
    );
}

#[test]
fn serde_tags() {
    assert_eq!(serde_json::to_string(&Format::Webp).unwrap(), "\"webp\"");
    assert_eq!(
        serde_json::from_str::<Format>("\"rast\"").unwrap(),
        Format::Rast
    );
}
