// db/schema.rs
use sqlx::{Pool, Postgres};

// Each statement is idempotent so the bootstrap can run on every start.
const SCHEMA: &[&str] = &[
    r#"
    DO $$ BEGIN
        CREATE TYPE user_role AS ENUM ('client', 'provider');
    EXCEPTION
        WHEN duplicate_object THEN NULL;
    END $$;
    "#,
    r#"
    DO $$ BEGIN
        CREATE TYPE booking_status AS ENUM ('pending', 'confirmed', 'cancelled', 'completed');
    EXCEPTION
        WHEN duplicate_object THEN NULL;
    END $$;
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        email VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        role user_role NOT NULL DEFAULT 'client',
        full_name VARCHAR(255) NOT NULL,
        phone VARCHAR(50),
        profile_image TEXT,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        is_certified BOOLEAN NOT NULL DEFAULT FALSE,
        ville VARCHAR(100),
        secteur VARCHAR(100),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS provider_profiles (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
        metier VARCHAR(100) DEFAULT 'General',
        description TEXT,
        experience_annees INTEGER,
        tarif_horaire DOUBLE PRECISION,
        zone_intervention VARCHAR(255),
        adresse TEXT,
        portfolio JSONB,
        disponibilites JSONB,
        note_moyenne DOUBLE PRECISION NOT NULL DEFAULT 0,
        nombre_avis INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS services (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        prestataire_id UUID NOT NULL REFERENCES provider_profiles(id) ON DELETE CASCADE,
        nom_service VARCHAR(255) NOT NULL,
        description TEXT,
        prix DOUBLE PRECISION,
        duree_estimee INTEGER,
        categorie VARCHAR(100),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        client_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        prestataire_id UUID NOT NULL REFERENCES provider_profiles(id) ON DELETE CASCADE,
        service_id UUID NOT NULL REFERENCES services(id) ON DELETE CASCADE,
        date_reservation TIMESTAMPTZ NOT NULL,
        statut booking_status NOT NULL DEFAULT 'pending',
        adresse_prestation TEXT,
        prix_final DOUBLE PRECISION,
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reviews (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        booking_id UUID NOT NULL UNIQUE REFERENCES bookings(id) ON DELETE CASCADE,
        note INTEGER NOT NULL CHECK (note BETWEEN 1 AND 5),
        commentaire TEXT,
        photos JSONB,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS messages (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        booking_id UUID NOT NULL REFERENCES bookings(id) ON DELETE CASCADE,
        sender_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        message TEXT NOT NULL,
        lu BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_services_prestataire ON services(prestataire_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookings_client ON bookings(client_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookings_prestataire ON bookings(prestataire_id)",
    "CREATE INDEX IF NOT EXISTS idx_messages_booking ON messages(booking_id)",
];

pub async fn init_schema(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("database schema ready ({} statements)", SCHEMA.len());
    Ok(())
}
