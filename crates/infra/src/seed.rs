//! Default dataset written to storage the first time a collection is read.

use rendezvous_domain::{
    Booking, BookingStatus, NaiveDate, Rating, Service, Time, TimeSlot, User, UserType, ID,
};

fn time(hours: u32, minutes: u32) -> Time {
    Time::new(hours, minutes).expect("Seed times to be valid")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Seed dates to be valid")
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    duration: u32,
    description: &str,
    provider_id: &str,
    image: &str,
    rating: f64,
    reviews: u32,
) -> Service {
    Service {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        price,
        duration,
        description: description.into(),
        provider_id: provider_id.into(),
        image: image.into(),
        rating,
        reviews,
    }
}

pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "s1",
            "Coupe et Coiffage",
            "Beauté",
            45.0,
            60,
            "Coupe professionnelle avec coiffage et finitions",
            "p1",
            "public/images/1.png",
            4.8,
            124,
        ),
        service(
            "s2",
            "Manucure Gel",
            "Beauté",
            35.0,
            45,
            "Manucure gel avec design personnalisé",
            "p1",
            "https://images.unsplash.com/photo-1604654894610-df63bc536371?w=400&h=300&fit=crop",
            4.9,
            98,
        ),
        service(
            "s3",
            "Relaxant",
            "Santé",
            60.0,
            60,
            "Massage complet du corps pour la détente",
            "p2",
            "public/images/2.png",
            4.7,
            156,
        ),
        service(
            "s4",
            "Soin du Visage",
            "Soins",
            55.0,
            50,
            "Soin facial complet avec produits naturels",
            "p2",
            "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=400&h=300&fit=crop",
            4.6,
            87,
        ),
        service(
            "s5",
            "Épilation Laser",
            "Beauté",
            80.0,
            45,
            "Épilation laser professionnelle et indolore",
            "p3",
            "https://i.pinimg.com/1200x/79/5b/39/795b395a85691faf61db06e2b8cc29c7.jpg",
            4.9,
            203,
        ),
        service(
            "s6",
            "Consultation Nutritionniste",
            "Santé",
            70.0,
            45,
            "Consultation personnalisée avec plan nutritionnel",
            "p4",
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400&h=300&fit=crop",
            4.8,
            112,
        ),
    ]
}

/// Weekly opening hours of the seeded providers
pub fn default_time_slots() -> Vec<TimeSlot> {
    // (provider, weekdays, start hour, end hour)
    let plans: [(&str, &[u8], u32, u32); 4] = [
        ("p1", &[1, 2, 3, 4, 5], 9, 17),
        ("p2", &[2, 3, 4, 5, 6], 10, 18),
        ("p3", &[1, 3, 5], 8, 16),
        ("p4", &[1, 2, 3, 4, 5], 9, 17),
    ];

    let mut slots = Vec::new();
    for (provider_id, days, start, end) in plans.iter() {
        for day in days.iter() {
            slots.push(TimeSlot {
                id: ID::from(format!("ts{}", slots.len() + 1).as_str()),
                provider_id: ID::from(*provider_id),
                day_of_week: *day,
                start_time: time(*start, 0),
                end_time: time(*end, 0),
                is_available: true,
            });
        }
    }
    slots
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    photo: &str,
    user_type: UserType,
    address: &str,
    bio: Option<&str>,
    business_name: Option<&str>,
    specialties: &[&str],
) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        photo: Some(photo.into()),
        user_type,
        address: Some(address.into()),
        bio: bio.map(String::from),
        business_name: business_name.map(String::from),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn default_clients() -> Vec<User> {
    vec![
        user(
            "c1",
            "Marie Dupont",
            "marie@example.com",
            "06 12 34 56 78",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
            UserType::Client,
            "123 Rue de Paris, 75001 Paris",
            None,
            None,
            &[],
        ),
        user(
            "c2",
            "Jean Martin",
            "jean@example.com",
            "06 98 76 54 32",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
            UserType::Client,
            "456 Avenue de Lyon, 75012 Paris",
            None,
            None,
            &[],
        ),
    ]
}

pub fn default_providers() -> Vec<User> {
    vec![
        user(
            "p1",
            "Sophie Bernard",
            "sophie@salonelegance.com",
            "06 11 22 33 44",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
            UserType::Provider,
            "789 Boulevard Saint-Germain, 75006 Paris",
            Some("Salon de beauté haut de gamme avec 10 ans d'expérience"),
            Some("Salon Élégance"),
            &["Coiffure", "Manucure", "Beauté"],
        ),
        user(
            "p2",
            "Luc Moreau",
            "luc@wellnesscenter.com",
            "06 44 55 66 77",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop",
            UserType::Provider,
            "321 Rue de Rivoli, 75004 Paris",
            Some("Centre de bien-être spécialisé dans les soins naturels"),
            Some("Wellness Center"),
            &["Massage", "Soins du visage", "Bien-être"],
        ),
        user(
            "p3",
            "Isabelle Leclerc",
            "isabelle@clinicbeauty.com",
            "06 77 88 99 00",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
            UserType::Provider,
            "654 Avenue Montaigne, 75008 Paris",
            Some("Clinique esthétique avec équipements dernière génération"),
            Some("Clinic Beauty"),
            &["Épilation laser", "Dermatologie", "Beauté"],
        ),
        user(
            "p4",
            "Dr. Pierre Rousseau",
            "pierre@healthplus.com",
            "06 33 44 55 66",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
            UserType::Provider,
            "987 Rue Saint-Antoine, 75011 Paris",
            Some("Nutritionniste diplômé avec 15 ans d'expérience"),
            Some("Health Plus"),
            &["Nutrition", "Santé", "Bien-être"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    client_id: &str,
    service_id: &str,
    provider_id: &str,
    date: NaiveDate,
    time: Time,
    status: BookingStatus,
    notes: Option<&str>,
) -> Booking {
    Booking {
        id: id.into(),
        client_id: client_id.into(),
        service_id: service_id.into(),
        provider_id: provider_id.into(),
        date,
        time,
        status,
        notes: notes.map(String::from),
        rating: None,
        review: None,
    }
}

/// Clients followed by providers
pub fn default_users() -> Vec<User> {
    let mut users = default_clients();
    users.extend(default_providers());
    users
}

pub fn default_bookings() -> Vec<Booking> {
    let mut reviewed = booking(
        "b3",
        "c1",
        "s3",
        "p2",
        date(2025, 10, 25),
        time(15, 0),
        BookingStatus::Confirmed,
        None,
    );
    reviewed.attach_review(
        Rating::new(5).expect("Seed rating to be valid"),
        "Excellent massage, très relaxant!".into(),
    );

    vec![
        booking(
            "b1",
            "c1",
            "s1",
            "p1",
            date(2025, 11, 15),
            time(10, 0),
            BookingStatus::Confirmed,
            Some("Coupe courte avec dégradé"),
        ),
        booking(
            "b2",
            "c1",
            "s2",
            "p1",
            date(2025, 11, 20),
            time(14, 0),
            BookingStatus::Confirmed,
            Some("Manucure rouge classique"),
        ),
        reviewed,
        booking(
            "b4",
            "c2",
            "s4",
            "p2",
            date(2025, 11, 18),
            time(11, 0),
            BookingStatus::Confirmed,
            None,
        ),
    ]
}
